// Gauge renderer producing the property bag the client-side gauge draws from
use crate::application::collaborators::{GaugeArgs, GaugeRenderer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct GaugePropsRenderer;

impl GaugePropsRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl GaugeRenderer for GaugePropsRenderer {
    fn render(&self, args: GaugeArgs<'_>) -> Value {
        // Visual options first so the computed props below always win
        let mut props: Map<String, Value> = args.options.visual.clone();
        props.insert("stat".to_string(), Value::from(args.options.stat.clone()));
        props.insert("value".to_string(), Value::from(args.value));
        props.insert("prefix".to_string(), Value::from(args.prefix));
        props.insert("suffix".to_string(), Value::from(args.suffix));
        props.insert(
            "theme".to_string(),
            serde_json::to_value(args.theme).unwrap_or(Value::Null),
        );
        props.insert("width".to_string(), Value::from(args.width));
        props.insert("height".to_string(), Value::from(args.height));
        Value::Object(props)
    }
}
