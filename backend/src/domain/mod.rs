//! Domain primitives, ports, and services.
//!
//! Purpose: define the habit aggregate and the use-cases around it without
//! any knowledge of HTTP or SQL. Inbound adapters call the driving ports in
//! [`ports`]; outbound adapters implement [`ports::HabitRepository`].
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - Habit / HabitDetails / HabitId: the habit aggregate.
//! - HabitService: implementation of the habit driving ports.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod habit;
pub mod habits_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::habit::{Habit, HabitDetails, HabitId, HabitIdError};
pub use self::habits_service::HabitService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
