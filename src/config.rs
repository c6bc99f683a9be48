#[cfg(debug_assertions)]
pub fn get_exit_url() -> &'static str {
    "about:blank"  // Keep local development in the tab
}

#[cfg(not(debug_assertions))]
pub fn get_exit_url() -> &'static str {
    "https://www.google.com"  // Where declined visitors are sent
}
