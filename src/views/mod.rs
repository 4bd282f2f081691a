pub(crate) mod flip_card;
mod home;
mod landscape;
mod picker;
mod recents;
