pub mod legality;
pub mod serialization;
pub mod session;
pub mod turn;
pub mod view;
