pub mod aggregate;

pub use aggregate::WishlistItem;
