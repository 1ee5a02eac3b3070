mod range_form;
mod results;
