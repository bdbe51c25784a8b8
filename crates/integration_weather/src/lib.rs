//! AMap weather integration
//!
//! Client for the AMap (Gaode) Weather API
//! (<https://lbs.amap.com/api/webservice/guide/api/weatherinfo>).
//! Provides live observations and a four-day forecast for one district code.

pub mod client;
mod models;

pub use client::{AmapClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CityForecast, DayCast, Extensions, LiveObservation};
