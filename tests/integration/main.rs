mod helpers;
mod test_search;
