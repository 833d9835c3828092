//! Data models used on both sides of the API

pub mod member;

pub use member::{MEMBER_FIELDS, Member, MemberCreate, MemberUpdate};
