pub mod template;
pub mod traits;
pub mod xyz;
