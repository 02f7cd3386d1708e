//! The single-page form. There is no server-side page state: the page posts
//! the form snapshot as JSON and renders whatever one submission returns.
//! Resubmitting simply replaces the displayed result.

use axum::response::Html;

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

const INDEX_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>PitchPerfectAI – Smart Cover Letter Generator</title>
<style>
  body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
         max-width: 720px; margin: 0 auto; padding: 24px; color: #222; }
  .title { text-align: center; font-size: 34px; font-weight: 700; color: #4B8BBE; margin-bottom: 10px; }
  label { display: block; margin-top: 14px; font-weight: 600; font-size: 14px; }
  input, textarea, select { width: 100%; box-sizing: border-box; margin-top: 4px; padding: 8px;
         background-color: #f9f9f9; border: 1px solid #ccc; border-radius: 6px; font-size: 14px; }
  textarea { min-height: 70px; }
  button { margin-top: 18px; background-color: #4B8BBE; color: white; font-weight: bold;
         border: none; border-radius: 10px; padding: 10px 24px; font-size: 16px; cursor: pointer; }
  button:disabled { opacity: 0.6; cursor: wait; }
  #status { margin-top: 14px; font-size: 14px; }
  #status.error { color: #b00020; }
  #letter { width: 100%; min-height: 320px; margin-top: 10px; display: none; }
  #download { display: none; margin-top: 10px; }
  #evaluation { display: none; margin-top: 20px; white-space: pre-wrap; background: #f4f8fb;
         border-left: 4px solid #4B8BBE; padding: 12px; }
  .footer { text-align: center; font-size: 13px; color: #666; margin-top: 30px; }
</style>
</head>
<body>
<h1 class="title">PitchPerfectAI – AI Cover Letter Generator</h1>
<hr>
<form id="cover-letter-form">
  <label>Job Title
    <input name="job_title" placeholder="e.g. Software Engineer" required>
  </label>
  <label>Company Name
    <input name="company" placeholder="e.g. Google" required>
  </label>
  <label>Years of Experience
    <input name="experience_years" placeholder="e.g. 3" required>
  </label>
  <label>Key Skills
    <textarea name="key_skills" placeholder="e.g. Python, Data Analysis, APIs" required></textarea>
  </label>
  <label>Achievements (optional)
    <textarea name="achievements" placeholder="e.g. Increased user retention by 20%"></textarea>
  </label>
  <label>Tone of the Letter
    <select name="tone">
      <option>Professional</option>
      <option>Persuasive</option>
      <option>Formal</option>
      <option>Friendly</option>
    </select>
  </label>
  <label>Paste the Job Description
    <textarea name="job_description" placeholder="Copy the full job posting here..."></textarea>
  </label>
  <button type="submit">Generate Cover Letter</button>
</form>

<div id="status"></div>
<textarea id="letter" readonly></textarea>
<a id="download">Download PDF</a>
<div id="evaluation"></div>

<div class="footer">Powered by Gemini 1.5 Flash</div>

<script>
const form = document.getElementById('cover-letter-form');
const status = document.getElementById('status');
const letter = document.getElementById('letter');
const download = document.getElementById('download');
const evaluation = document.getElementById('evaluation');

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  const button = form.querySelector('button');
  button.disabled = true;
  status.className = '';
  status.textContent = 'Crafting your personalized cover letter...';
  letter.style.display = 'none';
  download.style.display = 'none';
  evaluation.style.display = 'none';

  const data = Object.fromEntries(new FormData(form));
  try {
    const response = await fetch('/api/v1/letters', {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(data),
    });
    const body = await response.json();
    if (!response.ok) {
      status.className = 'error';
      status.textContent = body.error ? body.error.message : 'Request failed';
      return;
    }
    status.textContent = 'Cover letter generated successfully!';
    letter.value = body.letter;
    letter.style.display = 'block';
    download.href = 'data:application/pdf;base64,' + body.pdf_base64;
    download.download = body.pdf_file_name;
    download.style.display = 'inline-block';
    if (body.evaluation) {
      evaluation.textContent = 'ATS Match Analysis\n\n' + body.evaluation;
      evaluation.style.display = 'block';
    } else if (body.evaluation_error) {
      evaluation.textContent = 'Match analysis failed: ' + body.evaluation_error;
      evaluation.style.display = 'block';
    }
  } catch (err) {
    status.className = 'error';
    status.textContent = 'Request failed: ' + err;
  } finally {
    button.disabled = false;
  }
});
</script>
</body>
</html>
"##;
