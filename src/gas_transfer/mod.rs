pub mod wanninkhof2014;
