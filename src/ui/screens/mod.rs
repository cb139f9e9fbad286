pub(crate) mod dashboard;
pub(crate) mod payments;
pub(crate) mod people;
