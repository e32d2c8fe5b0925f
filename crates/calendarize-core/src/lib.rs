//! # Calendarize Core Library
//!
//! This library computes the geometry of calendar views: which grid row and
//! column every event occupies in a daily, weekly or monthly calendar. It
//! renders nothing itself; the `calendarize` CLI and any host application
//! consume the layouts as plain data (or JSON).
//!
//! ## Architecture
//!
//! - **Grid**: time-of-day rows, week windows and month cells
//! - **Packing**: interval column packing (daily) and per-cell stacking
//!   (weekly, monthly)
//! - **Layout**: the three view pipelines with their diagnostics
//! - **Navigation**: previous/next pages and query ranges
//!
//! ## Key Components
//!
//! - [`daily_layout`], [`weekly_layout`], [`monthly_layout`]: view pipelines
//! - [`LayoutConfig`]: Layout configuration management
//! - [`Event`]: The event value consumed by every view

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod layout;
pub mod navigation;
pub mod packing;

pub use config::{LayoutConfig, LayoutSettings};
pub use error::{ConfigError, CoreError, EventError};
pub use event::{collect_events, events_from_json, Event, EventRecord, ToEvent};
pub use grid::{days_in_month, GridRow, MonthGrid, RowSpan, TimeGrid, WeekWindow};
pub use layout::{
    compute_layout, daily_layout, monthly_layout, weekly_layout, DailyLayout, Diagnostics, ExcludedEvent,
    ExclusionReason, Layout, LayoutScope, MonthlyLayout, WeeklyLayout,
};
pub use navigation::{query_range, Navigation, QueryRange};
pub use packing::{pack_columns, stack_cells, CellCoord, CellPlacement, ColumnPlacement};
