pub mod chart;
pub mod config;
pub mod data;
pub mod web;
