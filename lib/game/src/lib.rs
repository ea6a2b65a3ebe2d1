pub mod representations {
	pub mod board;
	pub mod piece;
	pub mod moves;
}

pub mod moves {
	pub mod attack;
	pub mod move_gen;
	pub mod apply;
}

pub mod constants;
pub mod result;
