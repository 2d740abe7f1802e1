pub mod stats_table;
