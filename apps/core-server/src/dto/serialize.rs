use time::serde::format_description;

// calendar dates travel as `YYYY-MM-DD`
format_description!(pub(crate) iso_date, Date, "[year]-[month]-[day]");
