pub(crate) mod size_constraint;
