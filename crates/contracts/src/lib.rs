//! Контракты REST API каталога Laserio.
//!
//! Общие DTO, которыми админка обменивается с внешним REST-сервисом.

pub mod domain;
pub mod system;
