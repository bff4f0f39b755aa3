//! Wire contracts shared by the Bkhdmtak admin frontend and the `/Admin/*`
//! REST API: resource DTOs, list filters, status vocabularies and the
//! query-string conventions of the backend.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
