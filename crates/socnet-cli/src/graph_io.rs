//! JSON/CSV reading and writing of whole graphs.

use crate::CliError;
use crate::export;
use socnet_graph::{CsvRow, Graph, GraphOptions, GraphRecord};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl FromStr for InputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(()),
        }
    }
}

impl InputFormat {
    /// `.csv` paths read as CSV; everything else, stdin included, as JSON.
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(p) if p.to_ascii_lowercase().ends_with(".csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    AdjacencyList,
    AdjacencyMatrix,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "adjacency-list" | "list" => Ok(Self::AdjacencyList),
            "adjacency-matrix" | "matrix" => Ok(Self::AdjacencyMatrix),
            _ => Err(()),
        }
    }
}

pub fn parse_graph(text: &str, format: InputFormat, options: GraphOptions) -> Result<Graph, CliError> {
    let graph = match format {
        InputFormat::Json => {
            let record: GraphRecord = serde_json::from_str(text)?;
            Graph::from_record(&record, options)?
        }
        InputFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(text.as_bytes());
            let rows = reader
                .deserialize::<CsvRow>()
                .collect::<Result<Vec<_>, _>>()?;
            Graph::from_csv_rows(&rows, options)?
        }
    };
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        ?format,
        "graph loaded"
    );
    Ok(graph)
}

pub fn render_graph(graph: &Graph, format: OutputFormat, pretty: bool) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => {
            let record = graph.to_record();
            let mut text = if pretty {
                serde_json::to_string_pretty(&record)?
            } else {
                serde_json::to_string(&record)?
            };
            text.push('\n');
            Ok(text)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for row in graph.to_csv_rows() {
                writer.serialize(row)?;
            }
            if graph.is_empty() {
                writer.write_record(socnet_graph::CSV_HEADER)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|err| CliError::Io(err.into_error()))?;
            String::from_utf8(bytes).map_err(|err| {
                CliError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
            })
        }
        OutputFormat::AdjacencyList => Ok(export::adjacency_list_text(graph)),
        OutputFormat::AdjacencyMatrix => Ok(export::adjacency_matrix_text(graph)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socnet_graph::NewNode;

    #[test]
    fn csv_round_trip_keeps_turkish_headers() {
        let mut g = Graph::default();
        let a = g.add_node(NewNode::named("Ayse").at(1.0, 2.0)).unwrap();
        let b = g.add_node(NewNode::named("Ali").at(3.0, 4.0)).unwrap();
        g.add_edge(a, b).unwrap();

        let text = render_graph(&g, OutputFormat::Csv, false).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header.trim_end(), socnet_graph::CSV_HEADER.join(","));

        let back = parse_graph(&text, InputFormat::Csv, GraphOptions::default()).unwrap();
        assert_eq!(back.node_count(), 2);
        assert!(back.has_edge(a, b));
        assert_eq!(back.node(a).unwrap().name, "Ayse");
    }

    #[test]
    fn empty_graph_csv_still_has_a_header() {
        let text = render_graph(&Graph::default(), OutputFormat::Csv, false).unwrap();
        assert!(text.starts_with("DugumId,Isim"));
    }

    #[test]
    fn format_names() {
        assert_eq!("CSV".parse::<InputFormat>(), Ok(InputFormat::Csv));
        assert_eq!(
            "adjacency-matrix".parse::<OutputFormat>(),
            Ok(OutputFormat::AdjacencyMatrix)
        );
        assert_eq!(InputFormat::from_path(Some("x/y.CSV")), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(None), InputFormat::Json);
    }
}
