//! Wire contract of the finboard console: entity records, their static
//! descriptors and the request / response shapes of the CRUD services.

pub mod domain;
pub mod shared;
pub mod system;
