pub mod animation;
pub mod capability;
pub mod client;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod endpoint;
pub mod error;
pub mod palette;
pub mod pipeline;
pub mod selector;
