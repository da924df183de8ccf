// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545 that the extractor cares about.

/// Opens a block, e.g. `BEGIN:VEVENT`.
pub const KW_BEGIN: &str = "BEGIN";
/// Closes a block, e.g. `END:VEVENT`.
pub const KW_END: &str = "END";

/// Event component.
pub const KW_VEVENT: &str = "VEVENT";

// Section 3.2 - Property Parameters
/// Time zone identifier parameter.
pub const KW_TZID: &str = "TZID";

// Section 3.8 - Component Properties
/// Short summary or subject of a component.
pub const KW_SUMMARY: &str = "SUMMARY";
/// Start of a component.
pub const KW_DTSTART: &str = "DTSTART";
/// End of a component.
pub const KW_DTEND: &str = "DTEND";
