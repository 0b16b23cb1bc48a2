//! Serialization contract tests across the public API.

use plotly_schema::traces::carpet::{AxisTitle, AxisType, CarpetAxis};
use plotly_schema::traces::histogram2d;
use plotly_schema::traces::scatter_mapbox;
use plotly_schema::{
    Any, Carpet, Color, ColorBar, Figure, Font, Histogram2D, Mode, Palette, ScatterMapbox, Stream,
    Title, Visible,
};

mod absent_field_tests {
    use super::*;

    #[test]
    fn test_all_absent_trace_emits_only_the_type_tag() {
        assert_eq!(
            serde_json::to_string(&ScatterMapbox::new()).unwrap(),
            r#"{"type":"scattermapbox"}"#
        );
        assert_eq!(
            serde_json::to_string(&Carpet::new()).unwrap(),
            r#"{"type":"carpet"}"#
        );
        assert_eq!(
            serde_json::to_string(&Histogram2D::new()).unwrap(),
            r#"{"type":"histogram2d"}"#
        );
    }

    #[test]
    fn test_all_absent_nested_record_emits_empty_object() {
        assert_eq!(serde_json::to_string(&Font::new()).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&ColorBar::new()).unwrap(), "{}");
    }

    #[test]
    fn test_single_field_emits_exactly_one_key() {
        let trace = Histogram2D::new().with_name("only");
        assert_eq!(
            serde_json::to_string(&trace).unwrap(),
            r#"{"type":"histogram2d","name":"only"}"#
        );
    }

    #[test]
    fn test_assigned_default_nested_record_is_present_not_omitted() {
        let mut trace = ScatterMapbox::new();
        trace.stream = Some(Stream::new());
        let json = serde_json::to_string(&trace).unwrap();
        assert_eq!(json, r#"{"type":"scattermapbox","stream":{}}"#);
    }
}

mod option_set_tests {
    use super::*;

    #[test]
    fn test_token_order_is_fixed_by_bit_position() {
        let set = histogram2d::HoverInfo::NAME | histogram2d::HoverInfo::X;
        assert_eq!(serde_json::to_string(&set).unwrap(), "\"x+name\"");

        let set = scatter_mapbox::HoverInfo::SKIP | scatter_mapbox::HoverInfo::LONGITUDE;
        assert_eq!(serde_json::to_string(&set).unwrap(), "\"lon+skip\"");
    }

    #[test]
    fn test_explicitly_assigned_empty_set_is_an_empty_string_field() {
        let mut trace = Histogram2D::new();
        trace.hover_info = Some(histogram2d::HoverInfo::empty());
        let json = serde_json::to_string(&trace).unwrap();
        assert_eq!(json, r#"{"type":"histogram2d","hoverinfo":""}"#);

        // Absent set: no hoverinfo key at all.
        let json = serde_json::to_string(&Histogram2D::new()).unwrap();
        assert!(!json.contains("hoverinfo"));
    }

    #[test]
    fn test_mode_flags() {
        let trace = ScatterMapbox::new().with_mode(Mode::TEXT | Mode::MARKERS | Mode::LINES);
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains(r#""mode":"lines+markers+text""#));
    }
}

mod enum_literal_tests {
    use super::*;

    #[test]
    fn test_reserved_word_identifiers_map_to_reserved_literals() {
        // `type` is unusable as a field name; the wire key must still be
        // "type". `True`/`False` must serialize as the bare words.
        let axis = CarpetAxis::new().with_axis_type(AxisType::Linear);
        assert_eq!(
            serde_json::to_string(&axis).unwrap(),
            r#"{"type":"linear"}"#
        );
        assert_eq!(serde_json::to_string(&Visible::True).unwrap(), "\"true\"");
    }

    #[test]
    fn test_empty_string_literals_are_preserved() {
        assert_eq!(
            serde_json::to_string(&histogram2d::HistNorm::None).unwrap(),
            "\"\""
        );
    }

    #[test]
    fn test_auto_axis_type_is_a_dash() {
        assert_eq!(serde_json::to_string(&AxisType::Auto).unwrap(), "\"-\"");
    }
}

mod key_remapping_tests {
    use super::*;

    #[test]
    fn test_overridden_keys_never_use_the_field_identifier() {
        let mut trace = ScatterMapbox::new().with_longitude(vec![0.0]).with_latitude(vec![0.0]);
        trace.show_legend = Some(true);
        trace.connect_gaps = Some(false);
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains(r#""lon":[0.0]"#));
        assert!(json.contains(r#""lat":[0.0]"#));
        assert!(json.contains(r#""showlegend":true"#));
        assert!(json.contains(r#""connectgaps":false"#));
        assert!(!json.contains("longitude"));
        assert!(!json.contains("show_legend"));
        assert!(!json.contains("connect_gaps"));
    }

    #[test]
    fn test_unmapped_keys_use_the_field_identifier_unchanged() {
        let mut trace = Carpet::new().with_name("grid");
        trace.opacity = Some(0.5);
        trace.da = Some(1.0);
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains(r#""name":"grid""#));
        assert!(json.contains(r#""opacity":0.5"#));
        assert!(json.contains(r#""da":1.0"#));
    }
}

mod document_tests {
    use super::*;

    #[test]
    fn test_minimal_trace_document() {
        // A named trace with one numeric array set and an unset color bar
        // serializes to exactly three keys.
        let trace = Histogram2D::new()
            .with_name("Sample")
            .with_x(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            serde_json::to_string(&trace).unwrap(),
            r#"{"type":"histogram2d","name":"Sample","x":[1.0,2.0,3.0]}"#
        );
    }

    #[test]
    fn test_figure_with_mixed_traces() {
        let carpet = Carpet::new()
            .with_carpet("c1")
            .with_a(vec![4.0, 5.0])
            .with_b(vec![1.0, 2.0])
            .with_a_axis(CarpetAxis::new().with_title(AxisTitle::new("a axis")));
        let histogram = Histogram2D::new()
            .with_x(vec![1.0, 1.0, 2.0])
            .with_y(vec![2.0, 3.0, 3.0])
            .with_color_scale(Palette::Viridis)
            .with_color_bar(ColorBar::new().with_title(Title::new("count")));

        let json = Figure::new()
            .add_trace(carpet)
            .add_trace(histogram)
            .to_json()
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let data = value["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["type"], "carpet");
        assert_eq!(data[0]["aaxis"]["title"]["text"], "a axis");
        assert_eq!(data[1]["type"], "histogram2d");
        assert_eq!(data[1]["colorscale"], "Viridis");
        assert_eq!(data[1]["colorbar"]["title"]["text"], "count");
    }

    #[test]
    fn test_field_order_follows_declaration_not_assignment() {
        // `name` is declared before `x`; assigning in the opposite order
        // must not change the serialized order.
        let trace = Histogram2D::new()
            .with_x(vec![1.0])
            .with_name("later");
        assert_eq!(
            serde_json::to_string(&trace).unwrap(),
            r#"{"type":"histogram2d","name":"later","x":[1.0]}"#
        );
    }

    #[test]
    fn test_free_form_values_pass_through() {
        let mut trace = ScatterMapbox::new();
        trace.meta = Some(Any::from("run-42").into());
        trace.ui_revision = Some(Any::Int(7));
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains(r#""meta":"run-42""#));
        assert!(json.contains(r#""uirevision":7"#));
    }

    #[test]
    fn test_marker_with_nested_color_bar() {
        let marker = scatter_mapbox::SymbolicMarker::new()
            .with_size(vec![4.0, 8.0])
            .with_color(vec![0.1, 0.9]);
        let marker = scatter_mapbox::SymbolicMarker {
            show_scale: Some(true),
            color_bar: Some(ColorBar::new().with_thickness(15.0)),
            ..marker
        };
        let trace = ScatterMapbox::new().with_marker(marker);
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains(r#""showscale":true"#));
        assert!(json.contains(r#""colorbar":{"thickness":15.0}"#));
        assert!(json.contains(r#""color":[0.1,0.9]"#));
    }

    #[test]
    fn test_fill_color_string_forms() {
        let mut trace = ScatterMapbox::new();
        trace.fill = Some(scatter_mapbox::Fill::ToSelf);
        trace.fill_color = Some(Color::Rgba(200, 100, 0, 0.25));
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains(r#""fill":"toself""#));
        assert!(json.contains(r#""fillcolor":"rgba(200, 100, 0, 0.25)""#));
    }
}
