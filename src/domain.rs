pub mod hotel;
pub mod list_field;
pub mod rating;

pub use hotel::HotelRecord;
pub use list_field::parse_list;
pub use rating::{rating_desc, RatingLabel};
