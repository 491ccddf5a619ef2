use comfy_table::Table;

/// How listing commands render the entities returned by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOutput {
    /// One line per entity, in the order returned by the service.
    #[default]
    List,
    /// A table with a header row, rendered once every page has been fetched.
    Table,
}

impl ListOutput {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListOutput::List => "list",
            ListOutput::Table => "table",
        }
    }
}

pub(crate) fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_header(header);
    table
}
