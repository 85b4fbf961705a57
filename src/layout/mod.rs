pub(crate) mod aligned;
pub(crate) mod alignment;
pub(crate) mod attributes;
pub(crate) mod constrained;
pub(crate) mod frame;
pub(crate) mod inset;
pub(crate) mod overlay;
pub(crate) mod protocol;
pub(crate) mod stack;
