use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use syslog5424::Parser;

const INPUTS: [(&str, &str); 3] = [
    (
        "no_sd",
        "<34>1 2003-10-11T22:14:15.003Z mymachine.example.com su - ID47 - 'su root' failed for lonvick on /dev/pts/8",
    ),
    (
        "sd",
        r#"<165>1 2003-10-11T22:14:15.003Z mymachine.example.com evntslog - ID47 [exampleSDID@32473 iut="3" eventSource="Application" eventID="1011"][examplePriority@32473 class="high"] An application event log entry..."#,
    ),
    (
        "escaped",
        r#"<165>1 2003-10-11T22:14:15.003Z mymachine.example.com evntslog - ID47 [exampleSDID@32473 escape="\"\\\]" path="C:\\temp"] done"#,
    ),
];

fn parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = Parser::new();

    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::new("own", name), input, |b, input| {
            b.iter(|| {
                let _ = parser.parse(input);
            })
        });

        group.bench_with_input(BenchmarkId::new("syslog_loose", name), input, |b, input| {
            b.iter(|| {
                let _ = syslog_loose::parse_message(input, syslog_loose::Variant::RFC5424);
            })
        });
    }

    group.finish();
}

fn relaxed(c: &mut Criterion) {
    let input = "<40>1 2012-11-30T06:45:29+00:00 host app web.3 - State changed from starting to up";
    let parser = Parser::new().allow_missing_structured_data(true);

    c.bench_function("relaxed_fallback", |b| {
        b.iter(|| {
            let _ = parser.parse(input);
        })
    });
}

criterion_group!(benches, parse, relaxed);
criterion_main!(benches);
