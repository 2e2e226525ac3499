//! Background workers spawned by the runtime.

mod page;

pub use page::spawn_page_worker;
