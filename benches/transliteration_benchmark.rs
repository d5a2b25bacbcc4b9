use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pali_translit::{
    translit_pali_script, ConversionRequest, RomanStyle, Script, Transliterator,
};

const ROMAN_PASSAGE: &str = "evaṃ me sutaṃ ekaṃ samayaṃ bhagavā sāvatthiyaṃ viharati \
    jetavane anāthapiṇḍikassa ārāme. tatra kho bhagavā bhikkhū āmantesi bhikkhavo ti.";

fn benchmark_transliteration(c: &mut Criterion) {
    let to_myanmar = Transliterator::new(ConversionRequest::new(Script::Roman, Script::Myanmar));
    let myanmar = to_myanmar.convert(ROMAN_PASSAGE);
    let to_thai = Transliterator::new(ConversionRequest::new(Script::Myanmar, Script::Thai));
    let to_roman = Transliterator::new(
        ConversionRequest::new(Script::Thai, Script::Roman).with_style(RomanStyle::Iso),
    );
    let thai = to_thai.convert(&myanmar);

    c.bench_function("roman_to_myanmar_passage", |b| {
        b.iter(|| to_myanmar.convert(black_box(ROMAN_PASSAGE)))
    });

    c.bench_function("myanmar_to_thai_passage", |b| {
        b.iter(|| to_thai.convert(black_box(&myanmar)))
    });

    c.bench_function("thai_to_roman_iso_passage", |b| {
        b.iter(|| to_roman.convert(black_box(&thai)))
    });

    let tagged = format!("<p><hi rend=\"bold\">{ROMAN_PASSAGE}</hi></p>");
    let request = ConversionRequest::new(Script::Roman, Script::Khmer);
    c.bench_function("tagged_roman_to_khmer_with_routing", |b| {
        b.iter(|| translit_pali_script(black_box(&tagged), &request))
    });
}

criterion_group!(benches, benchmark_transliteration);
criterion_main!(benches);
