mod tests_load;
mod tests_search_save;
mod tests_strategy;
mod tests_transform;
