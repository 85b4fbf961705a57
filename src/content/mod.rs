pub(crate) mod cache;
pub(crate) mod element_content;
