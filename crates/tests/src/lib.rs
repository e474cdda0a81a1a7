#[cfg(test)]
mod common;

#[cfg(test)]
mod profile_guard_tests;

#[cfg(test)]
mod profile_create_tests;

#[cfg(test)]
mod listing_tests;

#[cfg(test)]
mod login_tests;
