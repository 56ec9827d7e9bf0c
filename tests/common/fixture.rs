//! Source table fixtures written to a temporary directory

use aop_owl::{Config, OrderingStrategy};
use std::path::Path;
use tempfile::TempDir;

const EC_HEADER: &str = "AOP,Key Event,Action,Object Source,Object ID,Object Term,Process/Phenotype Source,Process/Phenotype ID,Process/Phenotype Term";
const KE_HEADER: &str = "AOP\tKey Event\tAdverse Outcome";
const KER_HEADER: &str = "AOP\tEvent1\tEvent2\tRelationship\tadjacent";

/// Source, id and name cells of one term
pub type TermCells<'a> = (&'a str, &'a str, &'a str);

/// Builder for the EC/KE/KER tables of a test run
pub struct TableFixture {
    dir: TempDir,
    components: Vec<String>,
    key_events: Vec<String>,
    relationships: Vec<String>,
}

impl TableFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
            components: Vec::new(),
            key_events: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Add an event component row
    pub fn component(
        mut self,
        aop: u32,
        event: u32,
        action: &str,
        object: Option<TermCells<'_>>,
        phenotype: Option<TermCells<'_>>,
    ) -> Self {
        let cells = |term: Option<TermCells<'_>>| match term {
            Some((source, id, name)) => format!("{},{},{}", source, id, quote(name)),
            None => ",,".to_string(),
        };
        self.components.push(format!(
            "Aop:{},Event:{},{},{},{}",
            aop,
            event,
            action,
            cells(object),
            cells(phenotype)
        ));
        self
    }

    /// Add a key event row carrying the adverse outcome title
    pub fn key_event(mut self, aop: u32, event: u32, title: &str) -> Self {
        self.key_events.push(format!("Aop:{}\tEvent:{}\t{}", aop, event, title));
        self
    }

    /// Add an adjacent relationship row
    pub fn link(mut self, aop: u32, event1: u32, event2: u32, relationship: u32) -> Self {
        self.relationships.push(format!(
            "Aop:{}\tEvent:{}\tEvent:{}\tRelationship:{}\tadjacent",
            aop, event1, event2, relationship
        ));
        self
    }

    /// Add a non-adjacent relationship row
    pub fn indirect_link(mut self, aop: u32, event1: u32, event2: u32) -> Self {
        self.relationships.push(format!(
            "Aop:{}\tEvent:{}\tEvent:{}\t\tnon-adjacent",
            aop, event1, event2
        ));
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the tables and return a config that reads them
    pub fn write(&self) -> Config {
        let tables = self.dir.path().join("tables");
        std::fs::create_dir_all(&tables).expect("tables dir");

        let mut config = Config::default();
        config.tables.event_components = tables.join("aop_ke_ec.csv");
        config.tables.key_events = tables.join("aop_ke_mie_ao.tsv");
        config.tables.relationships = tables.join("aop_ke_ker.tsv");
        config.output.directory = self.dir.path().join("output");

        write_table(&config.tables.event_components, EC_HEADER, &self.components);
        write_table(&config.tables.key_events, KE_HEADER, &self.key_events);
        write_table(&config.tables.relationships, KER_HEADER, &self.relationships);
        config
    }

    /// Like `write`, with the chain ordering strategy
    pub fn write_chain(&self) -> Config {
        let mut config = self.write();
        config.ordering = OrderingStrategy::Chain;
        config
    }
}

fn quote(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn write_table(path: &Path, header: &str, rows: &[String]) {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(path, content).expect("write table");
}
