mod batch;
mod scenarios;
mod test_utils;
