pub mod handler_binding;
pub use handler_binding::{HandleFn, HandlerBinding};

pub mod handler_loader;
pub use handler_loader::load_handler;

pub mod binding_registry;
pub use binding_registry::BindingRegistry;
