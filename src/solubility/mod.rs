pub mod weiss1974;
