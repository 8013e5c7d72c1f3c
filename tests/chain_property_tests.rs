use rand::Rng;
use rulechain::chain::{ChainBuilder, Handler};

// Subject recording which steps fired, in order.
type Trace = Vec<u8>;
type Node = Handler<u8, Trace, ()>;

fn step(tag: u8, matches: bool, short_circuit: bool) -> Node {
    Handler::new(move |_, _| Ok(matches), append(tag), short_circuit)
}

fn random_steps(rng: &mut impl Rng, len: usize) -> Vec<(bool, bool)> {
    (0..len).map(|_| (rng.gen_bool(0.5), rng.gen_bool(0.5))).collect()
}

fn append(tag: u8) -> impl Fn(&u8, Trace) -> Result<Trace, ()> + Send + Sync + 'static {
    move |_, mut trace| {
        trace.push(tag);
        Ok(trace)
    }
}

fn builder_for(steps: &[(bool, bool)]) -> ChainBuilder<u8, Trace, ()> {
    let (first_matches, first_short) = steps[0];
    steps[1..].iter().enumerate().fold(
        ChainBuilder::new(move |_, _| Ok(first_matches), append(0), first_short),
        |builder, (i, &(matches, short_circuit))| {
            builder.add_next(move |_, _| Ok(matches), append(i as u8 + 1), short_circuit)
        },
    )
}

// The expected trace, computed without the chain.
fn expected_trace(steps: &[(bool, bool)]) -> Trace {
    let mut trace = Vec::new();
    for (i, &(matches, short_circuit)) in steps.iter().enumerate() {
        if matches {
            trace.push(i as u8);
            if short_circuit {
                break;
            }
        }
    }
    trace
}

#[test]
fn test_non_matching_node_delegates_to_successor() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let tail_len = rng.gen_range(1..6);
        let steps = random_steps(&mut rng, tail_len);
        let tail = builder_for(&steps).build();
        let expected = tail.execute(&0, vec![]);

        let short_circuit = rng.gen_bool(0.5);
        let chain = step(u8::MAX, false, short_circuit).with_next(builder_for(&steps).build());

        assert_eq!(chain.execute(&0, vec![]), expected);
    }
}

#[test]
fn test_short_circuit_match_skips_successors() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let len = rng.gen_range(1..6);
        let steps = random_steps(&mut rng, len);
        let chain = step(u8::MAX, true, true).with_next(builder_for(&steps).build());

        assert_eq!(chain.execute(&0, vec![]), Ok(vec![u8::MAX]));
    }
}

#[test]
fn test_match_without_short_circuit_feeds_successor() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let len = rng.gen_range(1..6);
        let steps = random_steps(&mut rng, len);
        let chain = step(u8::MAX, true, false).with_next(builder_for(&steps).build());

        let mut expected = vec![u8::MAX];
        expected.extend(expected_trace(&steps));
        assert_eq!(chain.execute(&0, vec![]), Ok(expected));
    }
}

#[test]
fn test_last_node_always_terminates() {
    for (matches, short_circuit) in [(true, true), (true, false), (false, true), (false, false)] {
        let chain = step(1, matches, short_circuit);
        let trace = chain.execute(&0, vec![]).unwrap();

        assert!(trace.len() <= 1);
        assert_eq!(trace.is_empty(), !matches);
    }
}

#[test]
fn test_random_chains_follow_declaration_order() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let len = rng.gen_range(1..10);
        let steps = random_steps(&mut rng, len);

        let chain = builder_for(&steps).build();
        assert_eq!(chain.len(), len);
        assert_eq!(chain.execute(&0, vec![]), Ok(expected_trace(&steps)));
    }
}

#[test]
fn test_rebuilt_chains_agree() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let len = rng.gen_range(1..8);
        let builder = builder_for(&random_steps(&mut rng, len));

        let first = builder.build();
        let second = builder.build();
        for context in [0, 1, 42] {
            assert_eq!(first.execute(&context, vec![]), second.execute(&context, vec![]));
        }
    }
}
