pub(crate) mod builtin;
pub(crate) mod node;
pub(crate) mod tree;
