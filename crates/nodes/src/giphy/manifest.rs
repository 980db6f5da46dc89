//! Static description of the node as presented by a workflow editor.

use serde::Serialize;

use super::models::{Mode, OutputVisibility};

#[derive(Debug, Clone, Serialize)]
pub struct NodeManifest {
    pub metadata: NodeMetadata,
    pub settings: Vec<SettingSpec>,
    pub inputs: Vec<InputSpec>,
    pub outputs: Vec<OutputSpec>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeMetadata {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub font_color: &'static str,
    pub documentation: &'static str,
    pub google_connector: &'static str,
}

/// A selector setting.
#[derive(Debug, Clone, Serialize)]
pub struct SettingSpec {
    pub name: &'static str,
    pub display_name: &'static str,
    pub values: Vec<&'static str>,
    pub display_values: Vec<&'static str>,
    pub default: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSpec {
    pub name: &'static str,
    pub display_name: &'static str,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub default: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSpec {
    pub name: &'static str,
    pub display_name: &'static str,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub visible: bool,
}

/// Statically declared variable types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueType {
    String,
    Url,
    Image { attribute: &'static str },
    Struct { fields: Vec<(&'static str, ValueType)> },
    List { item: Box<ValueType> },
    Json,
}

fn gif_struct() -> ValueType {
    ValueType::Struct {
        fields: vec![
            ("title", ValueType::String),
            ("url", ValueType::Url),
            ("img", ValueType::Image { attribute: "img" }),
            ("rating", ValueType::String),
            ("id", ValueType::String),
        ],
    }
}

pub fn manifest() -> NodeManifest {
    let visibility = OutputVisibility::for_mode(Mode::default());

    NodeManifest {
        metadata: NodeMetadata {
            name: "giphy",
            display_name: "Giphy",
            description: "GIPHY is your top source for the best & newest GIFs & Animated Stickers online. \
                          Find everything from funny GIFs, reaction GIFs, unique GIFs and more.",
            color: "#000000",
            font_color: "white",
            documentation: "https://docs.wayscript.com/library/modules/giphy",
            google_connector: "wayscript-giphy",
        },
        settings: vec![SettingSpec {
            name: "mode",
            display_name: "Mode",
            values: Mode::ALL.iter().map(|m| m.as_str()).collect(),
            display_values: Mode::ALL.iter().map(|m| m.display_name()).collect(),
            default: Mode::default().as_str(),
            description: "Single Random Result returns a single random result each time.<br><br>\
                          All Results returns the top 25 results.",
        }],
        inputs: vec![InputSpec {
            name: "search_term",
            display_name: "Search Term",
            value_type: ValueType::String,
            default: "",
            required: true,
        }],
        outputs: vec![
            OutputSpec {
                name: "gif",
                display_name: "Gif",
                value_type: gif_struct(),
                visible: visibility.gif,
            },
            OutputSpec {
                name: "gif_list",
                display_name: "Gifs",
                value_type: ValueType::List { item: Box::new(gif_struct()) },
                visible: visibility.gif_list,
            },
            OutputSpec {
                name: "output_json",
                display_name: "JSON Output",
                value_type: ValueType::Json,
                visible: true,
            },
        ],
    }
}
