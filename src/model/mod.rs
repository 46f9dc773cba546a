pub(crate) mod card;
pub(crate) mod crop;
pub(crate) mod tournament;
