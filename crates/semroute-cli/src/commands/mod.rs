pub mod brief;
pub mod dispatch;
pub mod extract;
pub mod index;
pub mod search;
