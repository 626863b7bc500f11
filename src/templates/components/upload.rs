use maud::{html, Markup, PreEscaped};

// Posts the chosen file's text as the request body, swaps in the returned
// listing and reports the outcome.
const UPLOAD_SCRIPT: &str = r#"
document.getElementById('csvFileInput').addEventListener('change', async (e) => {
    const file = e.target.files[0];
    if (!file) return;
    const resp = await fetch('/upload', {
        method: 'POST',
        headers: { 'Content-Type': 'text/csv', 'HX-Request': 'true' },
        body: await file.text(),
    });
    const body = await resp.text();
    if (resp.ok) {
        const listing = document.getElementById('listing');
        listing.outerHTML = body;
        htmx.process(document.getElementById('listing'));
        alert(resp.headers.get('X-Load-Message'));
    } else {
        alert(new DOMParser().parseFromString(body, 'text/html').body.textContent.trim());
    }
    e.target.value = '';
});
"#;

pub fn upload_form() -> Markup {
    html! {
        div class="upload-bar" {
            label for="csvFileInput" class="upload-label" {
                i class="fa-solid fa-file-csv" {} " Load hotels from CSV"
            }
            input type="file" id="csvFileInput" accept=".csv,text/csv";
        }
        script { (PreEscaped(UPLOAD_SCRIPT)) }
    }
}
