//! Watchlist tools.
//!
//! Regular watchlists are addressed by ID under `/api/v1/watchlist/{id}`;
//! colored lists (flag colors) live under `/api/v1/watchlists/colored`.

use crate::domains::tools::descriptor::{
    HttpMethod::{Delete, Get, Patch, Post, Put},
    ParamSpec, RequestMapper, ToolDescriptor,
};

const WATCHLIST_ID: ParamSpec = ParamSpec::string("watchlist_id", "Watchlist ID");
const COLOR: ParamSpec = ParamSpec::string("color", "Color name");

pub const WATCHLIST_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor::new(
        "list_watchlists",
        "List all watchlists",
        &[],
        RequestMapper::new(Get, "/api/v1/watchlists"),
    ),
    ToolDescriptor::new(
        "get_active_watchlist",
        "Get the currently active watchlist",
        &[],
        RequestMapper::new(Get, "/api/v1/watchlists/active"),
    ),
    ToolDescriptor::new(
        "set_active_watchlist",
        "Set the active watchlist by ID",
        &[ParamSpec::string("id", "Watchlist ID to set as active")],
        RequestMapper::new(Put, "/api/v1/watchlists/active").with_body(&["id"]),
    ),
    ToolDescriptor::new(
        "create_watchlist",
        "Create a new watchlist",
        &[ParamSpec::string("name", "Name for the new watchlist")],
        RequestMapper::new(Post, "/api/v1/watchlists").with_body(&["name"]),
    ),
    ToolDescriptor::new(
        "get_watchlist",
        "Get watchlist details by ID",
        &[WATCHLIST_ID],
        RequestMapper::new(Get, "/api/v1/watchlist/{watchlist_id}"),
    ),
    ToolDescriptor::new(
        "rename_watchlist",
        "Rename a watchlist",
        &[
            WATCHLIST_ID,
            ParamSpec::string("name", "New name for the watchlist"),
        ],
        RequestMapper::new(Patch, "/api/v1/watchlist/{watchlist_id}").with_body(&["name"]),
    ),
    ToolDescriptor::new(
        "delete_watchlist",
        "Delete a watchlist",
        &[WATCHLIST_ID],
        RequestMapper::new(Delete, "/api/v1/watchlist/{watchlist_id}"),
    ),
    ToolDescriptor::new(
        "add_watchlist_symbols",
        "Add symbols to a watchlist",
        &[
            WATCHLIST_ID,
            ParamSpec::strings(
                "symbols",
                "Symbols to add, e.g. [\"NASDAQ:AAPL\", \"NYSE:MSFT\"]",
            ),
        ],
        RequestMapper::new(Post, "/api/v1/watchlist/{watchlist_id}/symbols").with_body(&["symbols"]),
    ),
    ToolDescriptor::new(
        "remove_watchlist_symbols",
        "Remove symbols from a watchlist",
        &[WATCHLIST_ID, ParamSpec::strings("symbols", "Symbols to remove")],
        RequestMapper::new(Delete, "/api/v1/watchlist/{watchlist_id}/symbols")
            .with_body(&["symbols"]),
    ),
    ToolDescriptor::new(
        "flag_watchlist_symbol",
        "Flag or unflag a symbol in a watchlist",
        &[WATCHLIST_ID, ParamSpec::string("symbol", "Symbol to flag/unflag")],
        RequestMapper::new(Post, "/api/v1/watchlist/{watchlist_id}/flag").with_body(&["symbol"]),
    ),
    ToolDescriptor::new(
        "list_colored_watchlists",
        "List colored watchlists",
        &[],
        RequestMapper::new(Get, "/api/v1/watchlists/colored"),
    ),
    ToolDescriptor::new(
        "set_color_list_symbols",
        "Replace all symbols in a color list",
        &[COLOR, ParamSpec::strings("symbols", "Symbols to set for this color")],
        RequestMapper::new(Put, "/api/v1/watchlists/colored/{color}").with_body(&["symbols"]),
    ),
    ToolDescriptor::new(
        "append_color_list_symbols",
        "Add symbols to a color list",
        &[COLOR, ParamSpec::strings("symbols", "Symbols to add to this color")],
        RequestMapper::new(Post, "/api/v1/watchlists/colored/{color}/append")
            .with_body(&["symbols"]),
    ),
    ToolDescriptor::new(
        "remove_color_list_symbols",
        "Remove symbols from a color list",
        &[
            COLOR,
            ParamSpec::strings("symbols", "Symbols to remove from this color"),
        ],
        RequestMapper::new(Post, "/api/v1/watchlists/colored/{color}/remove")
            .with_body(&["symbols"]),
    ),
    ToolDescriptor::new(
        "bulk_remove_colored_symbols",
        "Remove symbols from all color lists",
        &[ParamSpec::strings("symbols", "Symbols to remove from all colors")],
        RequestMapper::new(Post, "/api/v1/watchlists/colored/bulk-remove").with_body(&["symbols"]),
    ),
];
