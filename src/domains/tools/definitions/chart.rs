//! Chart tools.
//!
//! Per-chart operations are addressed by TradingView chart ID under
//! `/api/v1/chart/{chart_id}`. Setters for symbol, resolution, chart type,
//! currency and unit pass their value as a query parameter; every other
//! write sends a JSON body.

use crate::domains::tools::descriptor::{
    HttpMethod::{Get, Post, Put},
    ParamSpec, RequestMapper, ToolDescriptor,
};

const CHART_ID: ParamSpec = ParamSpec::string("chart_id", "TradingView chart ID");
const CHART_ONLY: &[ParamSpec] = &[CHART_ID];

pub const CHART_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor::new(
        "list_charts",
        "List available TradingView chart IDs",
        &[],
        RequestMapper::new(Get, "/api/v1/charts"),
    ),
    ToolDescriptor::new(
        "get_active_chart",
        "Get active chart info (count, active index)",
        &[],
        RequestMapper::new(Get, "/api/v1/charts/active"),
    ),
    // Symbol
    ToolDescriptor::new(
        "get_symbol",
        "Get the current ticker symbol on a chart",
        CHART_ONLY,
        RequestMapper::new(Get, "/api/v1/chart/{chart_id}/symbol"),
    ),
    ToolDescriptor::new(
        "set_symbol",
        "Change the ticker symbol on a chart",
        &[
            CHART_ID,
            ParamSpec::string("symbol", "Ticker symbol, e.g. NASDAQ:AAPL"),
        ],
        RequestMapper::new(Put, "/api/v1/chart/{chart_id}/symbol").with_query(&["symbol"]),
    ),
    ToolDescriptor::new(
        "get_symbol_info",
        "Get extended symbol metadata",
        CHART_ONLY,
        RequestMapper::new(Get, "/api/v1/chart/{chart_id}/symbol/info"),
    ),
    // Resolution
    ToolDescriptor::new(
        "get_resolution",
        "Get the current chart resolution/timeframe",
        CHART_ONLY,
        RequestMapper::new(Get, "/api/v1/chart/{chart_id}/resolution"),
    ),
    ToolDescriptor::new(
        "set_resolution",
        "Set the chart resolution/timeframe",
        &[
            CHART_ID,
            ParamSpec::string("resolution", "Resolution, e.g. 1, 5, 15, 60, D, W, M"),
        ],
        RequestMapper::new(Put, "/api/v1/chart/{chart_id}/resolution")
            .with_query(&["resolution"]),
    ),
    // Chart type
    ToolDescriptor::new(
        "get_chart_type",
        "Get the chart type (candles, bars, line, etc.)",
        CHART_ONLY,
        RequestMapper::new(Get, "/api/v1/chart/{chart_id}/chart-type"),
    ),
    ToolDescriptor::new(
        "set_chart_type",
        "Set the chart type (candles, bars, line, etc.)",
        &[
            CHART_ID,
            ParamSpec::string("type", "Chart type: candles, bars, line, area, etc."),
        ],
        RequestMapper::new(Put, "/api/v1/chart/{chart_id}/chart-type").with_query(&["type"]),
    ),
    // Currency and unit
    ToolDescriptor::new(
        "get_currency",
        "Get the price denomination currency",
        CHART_ONLY,
        RequestMapper::new(Get, "/api/v1/chart/{chart_id}/currency"),
    ),
    ToolDescriptor::new(
        "set_currency",
        "Set the price denomination currency",
        &[
            CHART_ID,
            ParamSpec::string("currency", "Currency code, e.g. USD, EUR"),
        ],
        RequestMapper::new(Put, "/api/v1/chart/{chart_id}/currency").with_query(&["currency"]),
    ),
    ToolDescriptor::new(
        "list_available_currencies",
        "List available currencies for a chart",
        CHART_ONLY,
        RequestMapper::new(Get, "/api/v1/chart/{chart_id}/currency/available"),
    ),
    ToolDescriptor::new(
        "get_unit",
        "Get the display unit",
        CHART_ONLY,
        RequestMapper::new(Get, "/api/v1/chart/{chart_id}/unit"),
    ),
    ToolDescriptor::new(
        "set_unit",
        "Set the display unit",
        &[CHART_ID, ParamSpec::string("unit", "Display unit")],
        RequestMapper::new(Put, "/api/v1/chart/{chart_id}/unit").with_query(&["unit"]),
    ),
    ToolDescriptor::new(
        "list_available_units",
        "List available display units for a chart",
        CHART_ONLY,
        RequestMapper::new(Get, "/api/v1/chart/{chart_id}/unit/available"),
    ),
    // Navigation
    ToolDescriptor::new(
        "zoom_chart",
        "Zoom in or out on a chart",
        &[
            CHART_ID,
            ParamSpec::string("direction", "Zoom direction: in or out"),
        ],
        RequestMapper::new(Post, "/api/v1/chart/{chart_id}/zoom").with_body(&["direction"]),
    ),
    ToolDescriptor::new(
        "scroll_chart",
        "Scroll chart by bar count",
        &[
            CHART_ID,
            ParamSpec::integer(
                "bars",
                "Number of bars to scroll (positive=right, negative=left)",
            ),
        ],
        RequestMapper::new(Post, "/api/v1/chart/{chart_id}/scroll").with_body(&["bars"]),
    ),
    ToolDescriptor::new(
        "reset_chart_view",
        "Reset chart view (Alt+R)",
        CHART_ONLY,
        RequestMapper::new(Post, "/api/v1/chart/{chart_id}/reset-view"),
    ),
    ToolDescriptor::new(
        "go_to_date",
        "Navigate chart to a specific date",
        &[CHART_ID, ParamSpec::string("date", "Date to navigate to")],
        RequestMapper::new(Post, "/api/v1/chart/{chart_id}/go-to-date").with_body(&["date"]),
    ),
    ToolDescriptor::new(
        "get_visible_range",
        "Get the visible time range on a chart",
        CHART_ONLY,
        RequestMapper::new(Get, "/api/v1/chart/{chart_id}/visible-range"),
    ),
    ToolDescriptor::new(
        "set_visible_range",
        "Set the visible time range on a chart",
        &[
            CHART_ID,
            ParamSpec::integer("from", "Start timestamp"),
            ParamSpec::integer("to", "End timestamp"),
        ],
        RequestMapper::new(Put, "/api/v1/chart/{chart_id}/visible-range")
            .with_body(&["from", "to"]),
    ),
    ToolDescriptor::new(
        "set_timeframe",
        "Set chart timeframe (1D, 1W, 1M, etc.)",
        &[
            CHART_ID,
            ParamSpec::string(
                "timeframe",
                "Timeframe, e.g. 1D, 1W, 1M, 3M, 6M, YTD, 1Y, 5Y, ALL",
            ),
        ],
        RequestMapper::new(Put, "/api/v1/chart/{chart_id}/timeframe").with_body(&["timeframe"]),
    ),
    ToolDescriptor::new(
        "reset_scales",
        "Reset price scales on a chart",
        CHART_ONLY,
        RequestMapper::new(Post, "/api/v1/chart/{chart_id}/reset-scales"),
    ),
    ToolDescriptor::new(
        "undo_chart",
        "Undo last chart action (Ctrl+Z)",
        CHART_ONLY,
        RequestMapper::new(Post, "/api/v1/chart/{chart_id}/undo"),
    ),
    ToolDescriptor::new(
        "redo_chart",
        "Redo last chart action (Ctrl+Y)",
        CHART_ONLY,
        RequestMapper::new(Post, "/api/v1/chart/{chart_id}/redo"),
    ),
    // Toggles
    ToolDescriptor::new(
        "get_toggles",
        "Get toggle states (log, auto, extended)",
        CHART_ONLY,
        RequestMapper::new(Get, "/api/v1/chart/{chart_id}/toggles"),
    ),
    ToolDescriptor::new(
        "toggle_log_scale",
        "Toggle logarithmic scale on a chart",
        CHART_ONLY,
        RequestMapper::new(Post, "/api/v1/chart/{chart_id}/toggles/log-scale"),
    ),
    ToolDescriptor::new(
        "toggle_auto_scale",
        "Toggle auto scale on a chart",
        CHART_ONLY,
        RequestMapper::new(Post, "/api/v1/chart/{chart_id}/toggles/auto-scale"),
    ),
    ToolDescriptor::new(
        "toggle_extended_hours",
        "Toggle extended hours on a chart",
        CHART_ONLY,
        RequestMapper::new(Post, "/api/v1/chart/{chart_id}/toggles/extended-hours"),
    ),
    ToolDescriptor::new(
        "execute_chart_action",
        "Execute a chart action by ID",
        &[CHART_ID, ParamSpec::string("action_id", "Action ID to execute")],
        RequestMapper::new(Post, "/api/v1/chart/{chart_id}/action").with_body(&["action_id"]),
    ),
    ToolDescriptor::new(
        "list_chart_panes",
        "List chart panes",
        CHART_ONLY,
        RequestMapper::new(Get, "/api/v1/chart/{chart_id}/panes"),
    ),
    // Layout
    ToolDescriptor::new(
        "next_chart",
        "Switch to the next chart",
        &[],
        RequestMapper::new(Post, "/api/v1/chart/next"),
    ),
    ToolDescriptor::new(
        "prev_chart",
        "Switch to the previous chart",
        &[],
        RequestMapper::new(Post, "/api/v1/chart/prev"),
    ),
    ToolDescriptor::new(
        "maximize_chart",
        "Toggle chart maximize",
        &[],
        RequestMapper::new(Post, "/api/v1/chart/maximize"),
    ),
    ToolDescriptor::new(
        "activate_chart",
        "Set active chart by index",
        &[ParamSpec::integer("index", "Chart index to activate")],
        RequestMapper::new(Post, "/api/v1/chart/activate").with_body(&["index"]),
    ),
];
