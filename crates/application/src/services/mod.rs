pub mod address_sorter;
pub mod interface_grouper;

pub use address_sorter::aggregate;
pub use interface_grouper::group_by_interface;
