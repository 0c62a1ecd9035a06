use criterion::{criterion_group, criterion_main, Criterion, black_box};

use ward_results::specs::{token, ward_result};

fn sample_page(candidates: usize) -> String {
    let mut html = String::from(
        r#"<html><head><title>Know Your Results</title></head><body>
        <form><input type="hidden" name="org.apache.struts.taglib.html.TOKEN" value="5f1c0a9e2b"></form>
        <table id="GridView1"><tr><th>Sl No</th><th>Candidate Name</th><th>Party</th><th>Votes</th><th>Status</th></tr>
        <tr><td colspan="5">WARD Name : 12 , Reserved for : UR(G), Total Voters in Municipality Ward : 2310, Total Vaild Votes : 1804, Rejected Votes : 21, NOTA Votes : 14</td></tr>"#,
    );
    for i in 1..=candidates {
        let status = if i == 2 { "Elected" } else { "Lost" };
        html.push_str(&format!(
            "<tr><td>{i}</td><td>CANDIDATE {i}</td><td>PARTY{}</td><td>{}</td><td>{status}</td></tr>",
            i % 4,
            100 + i * 7
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_parse(c: &mut Criterion) {
    let small = sample_page(6);
    let large = sample_page(60);

    c.bench_function("ward_result_6", |b| {
        b.iter(|| {
            let p = ward_result::parse(black_box(&small));
            black_box(p.candidates.len())
        })
    });

    c.bench_function("ward_result_60", |b| {
        b.iter(|| {
            let p = ward_result::parse(black_box(&large));
            black_box(p.candidates.len())
        })
    });

    c.bench_function("token", |b| {
        b.iter(|| black_box(token::extract_token(black_box(&small))))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
