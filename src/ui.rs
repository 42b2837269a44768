use crate::dashboard::MoodChart;
use crate::models::FormView;

pub fn render_index(view: &FormView) -> String {
    let options: String = view
        .options
        .iter()
        .map(|option| {
            format!(
                r#"<label class="emoji-option{selected}" title="{label}"><input type="radio" name="mood_option" value="{value}" data-value="{value}"{checked} /><span>{emoji}</span></label>"#,
                selected = if option.selected { " selected" } else { "" },
                checked = if option.selected { " checked" } else { "" },
                label = escape_html(&option.label),
                value = option.value,
                emoji = option.emoji,
            )
        })
        .collect();

    let marker_left = if view.marker_left.is_empty() {
        "0%"
    } else {
        view.marker_left.as_str()
    };

    INDEX_HTML
        .replace("{{OPTIONS}}", &options)
        .replace("{{MOOD}}", &escape_html(&view.mood))
        .replace("{{RESULT_HIDDEN}}", hidden_class(view.result_visible))
        .replace("{{ERROR_HIDDEN}}", hidden_class(view.error_visible))
        .replace("{{MARKER_LEFT}}", &escape_html(marker_left))
        .replace("{{SCORE}}", &escape_html(&view.score_text))
        .replace("{{CATEGORY}}", &escape_html(&view.category_text))
        .replace("{{ERROR_TEXT}}", &escape_html(&view.error_text))
        .replace("{{SCREEN_TIME_LABEL}}", &escape_html(&view.screen_time_label))
        .replace("{{SCREEN_TIME}}", &escape_html(&view.screen_time))
        .replace("{{TYPING_SPEED}}", &escape_html(&view.typing_speed))
        .replace("{{INTERVENTION}}", &escape_html(&view.intervention_text))
}

pub fn render_dashboard(chart: &MoodChart) -> String {
    let max = f64::from(chart.max_value().max(1));
    let rows: String = chart
        .rows()
        .map(|row| {
            format!(
                r#"<div class="row"><span class="emoji">{label}</span><div class="bars"><div class="bar allocated" style="width: {alloc_pct:.1}%">{allocated}</div><div class="bar actual" style="width: {actual_pct:.1}%">{actual}</div></div></div>"#,
                label = escape_html(row.label),
                alloc_pct = f64::from(row.allocated) / max * 100.0,
                actual_pct = f64::from(row.actual) / max * 100.0,
                allocated = row.allocated,
                actual = row.actual,
            )
        })
        .collect();

    DASHBOARD_HTML.replace("{{ROWS}}", &rows)
}

fn hidden_class(visible: bool) -> &'static str {
    if visible { "" } else { " hidden" }
}

/// Escapes text for element content and quoted attributes. Braces are
/// encoded so inserted text can never form a template placeholder.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>ZenFlow Check-in</title>
  <style>
    :root {
      --bg-1: #eef5f1;
      --bg-2: #cfe8dc;
      --ink: #23302b;
      --accent: #3f8f6b;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f4faf7 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(640px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-family: "Georgia", serif;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    form {
      display: grid;
      gap: 18px;
    }

    .emojis {
      display: flex;
      gap: 10px;
      justify-content: space-between;
    }

    .emoji-option {
      font-size: 2rem;
      padding: 8px 12px;
      border-radius: 16px;
      cursor: pointer;
      border: 2px solid transparent;
    }

    .emoji-option input {
      display: none;
    }

    .emoji-option.selected {
      border-color: var(--accent);
      background: white;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    button:disabled {
      opacity: 0.6;
    }

    .gauge {
      position: relative;
      height: 14px;
      border-radius: 999px;
      background: linear-gradient(90deg, #7bc67e, #f2d16b, #f29b5c, #e0605e);
    }

    #indicator-marker {
      position: absolute;
      top: -6px;
      width: 4px;
      height: 26px;
      border-radius: 2px;
      background: var(--accent-2);
      transform: translateX(-2px);
    }

    .score {
      font-size: 2.4rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .error {
      color: #b3261e;
      font-weight: 600;
    }

    .hidden {
      display: none;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>How are you feeling?</h1>
      <p><a href="/dashboard">Mood dashboard</a></p>
    </header>

    <form id="stress-form" method="post" action="/check-in">
      <div class="emojis">{{OPTIONS}}</div>
      <input type="hidden" id="mood" name="mood" value="{{MOOD}}" />

      <div class="field">
        <label for="screen_time">Screen time today: <span id="screen_time_value">{{SCREEN_TIME_LABEL}}</span> h</label>
        <input id="screen_time" name="screen_time" type="range" min="0" max="16" step="0.5" value="{{SCREEN_TIME}}" />
      </div>

      <div class="field">
        <label for="typing_speed">Typing speed (wpm)</label>
        <input id="typing_speed" name="typing_speed" type="number" value="{{TYPING_SPEED}}" />
      </div>

      <button id="submit-button" type="submit">Check my stress</button>
    </form>

    <section id="result-card" class="result{{RESULT_HIDDEN}}">
      <div class="score" id="stress-score">{{SCORE}}</div>
      <div class="gauge"><div id="indicator-marker" style="left: {{MARKER_LEFT}}"></div></div>
      <p id="stress-category">{{CATEGORY}}</p>
      <p id="intervention-text">{{INTERVENTION}}</p>
    </section>

    <p id="error-message" class="error{{ERROR_HIDDEN}}">{{ERROR_TEXT}}</p>
  </main>

  <script>
    const form = document.getElementById('stress-form');
    const submitButton = document.getElementById('submit-button');
    const screenTimeInput = document.getElementById('screen_time');
    const screenTimeValue = document.getElementById('screen_time_value');
    const emojiOptions = document.querySelectorAll('.emoji-option');
    const moodInput = document.getElementById('mood');

    const scoreEl = document.getElementById('stress-score');
    const interventionEl = document.getElementById('intervention-text');
    const categoryEl = document.getElementById('stress-category');
    const markerEl = document.getElementById('indicator-marker');
    const resultCard = document.getElementById('result-card');
    const errorMessage = document.getElementById('error-message');

    emojiOptions.forEach((option) => {
      const radio = option.querySelector('input');
      radio.addEventListener('change', () => {
        emojiOptions.forEach((other) => other.classList.remove('selected'));
        option.classList.add('selected');
        moodInput.value = radio.dataset.value;
      });
    });

    screenTimeInput.addEventListener('input', () => {
      screenTimeValue.textContent = screenTimeInput.value;
    });

    const paint = (view) => {
      scoreEl.textContent = view.score_text;
      interventionEl.textContent = view.intervention_text;
      categoryEl.textContent = view.category_text;
      markerEl.style.left = view.marker_left || '0%';
      resultCard.classList.toggle('hidden', !view.result_visible);
      errorMessage.textContent = view.error_text;
      errorMessage.classList.toggle('hidden', !view.error_visible);
    };

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      resultCard.classList.add('hidden');
      errorMessage.classList.add('hidden');
      submitButton.disabled = true;

      try {
        const res = await fetch('/api/check-in', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            mood: moodInput.value,
            screen_time: screenTimeInput.value,
            typing_speed: form.elements.typing_speed.value
          })
        });
        if (!res.ok) {
          throw new Error(await res.text());
        }
        paint(await res.json());
      } catch (err) {
        console.error(err);
        errorMessage.textContent = 'Backend not responding!';
        errorMessage.classList.remove('hidden');
      } finally {
        submitButton.disabled = false;
      }
    });
  </script>
</body>
</html>
"#;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>ZenFlow Dashboard</title>
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      background: #eef5f1;
      color: #23302b;
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .app {
      width: min(720px, 100%);
      background: white;
      border-radius: 28px;
      padding: 32px;
      display: grid;
      gap: 14px;
    }

    .row {
      display: grid;
      grid-template-columns: 48px 1fr;
      align-items: center;
      gap: 12px;
    }

    .emoji {
      font-size: 1.8rem;
    }

    .bars {
      display: grid;
      gap: 4px;
    }

    .bar {
      border-radius: 6px;
      padding: 2px 8px;
      color: white;
      font-size: 0.8rem;
    }

    .allocated {
      background: #2f4858;
    }

    .actual {
      background: #3f8f6b;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Mood dashboard</h1>
    <p>Allocated (dark) vs actual (green).</p>
    {{ROWS}}
    <p><a href="/">Back to check-in</a></p>
  </main>
</body>
</html>
"#;
