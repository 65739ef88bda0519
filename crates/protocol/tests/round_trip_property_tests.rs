use graph_protocol::{ParseOptions, Response, format_result, parse_request, parse_response};
use proptest::prelude::*;
use sssp_core::{BellmanFordSolver, ShortestPathSolver};

fn request_strategy() -> impl Strategy<Value = String> {
    (1usize..12).prop_flat_map(|num_vertices| {
        let edge = (0..num_vertices, 0..num_vertices, -30i64..60);
        (
            Just(num_vertices),
            0..num_vertices,
            prop::collection::vec(edge, 0..30),
        )
            .prop_map(|(num_vertices, start, edges)| {
                let mut request = format!("{} {}", num_vertices, start);
                for (u, v, w) in edges {
                    request.push_str(&format!(" {},{},{}", u, v, w));
                }
                request
            })
    })
}

proptest! {
    /// Property: decoding the formatted result gives back the computed outcome
    #[test]
    fn formatted_result_decodes_to_computed_result(request in request_strategy()) {
        let graph = parse_request(&request, &ParseOptions::default()).unwrap();
        let result = BellmanFordSolver.compute(&graph).unwrap();

        let text = format_result(&result);
        let decoded = parse_response(&text).unwrap();

        prop_assert_eq!(decoded, Response::from(result));
    }

    /// Property: a distance response has exactly one token per vertex and ends with a space
    #[test]
    fn distance_response_shape(request in request_strategy()) {
        let graph = parse_request(&request, &ParseOptions::default()).unwrap();
        let result = BellmanFordSolver.compute(&graph).unwrap();

        if !result.is_negative_cycle() {
            let text = format_result(&result);
            prop_assert!(text.ends_with(' '));
            prop_assert!(!text.ends_with("  "));
            prop_assert_eq!(text.split_whitespace().count(), graph.num_vertices());
        }
    }

    /// Property: arbitrary text never panics the parser
    #[test]
    fn arbitrary_payload_never_panics(payload in "\\PC*") {
        let _ = parse_request(&payload, &ParseOptions::default());
    }
}
