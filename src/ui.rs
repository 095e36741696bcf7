use crate::models::SessionView;

pub fn render_page(view: &SessionView) -> String {
    // The bootstrap payload goes inside a JSON script tag; escaping '<' keeps
    // free-text goals from terminating it early.
    let bootstrap = serde_json::to_string(view)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c");
    INDEX_HTML
        .replace("{{DATE}}", &view.date)
        .replace("{{BOOTSTRAP}}", &bootstrap)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Coach</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6ef;
      --bg-2: #cfe8d6;
      --ink: #22302a;
      --accent: #2c8a5d;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    [hidden] {
      display: none !important;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f0e0 60%, #f2f7ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.35rem;
    }

    .subtitle {
      margin: 0;
      color: #5c665f;
      font-size: 0.98rem;
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 14px;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 18px;
      padding: 14px 18px;
    }

    .demo-toggle {
      display: inline-flex;
      align-items: center;
      gap: 8px;
      font-size: 0.92rem;
    }

    .demo-toggle input {
      width: 18px;
      height: 18px;
      accent-color: var(--accent);
    }

    .chip {
      margin-left: auto;
      font-size: 0.9rem;
      color: #6b756e;
    }

    .screen {
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 20px;
      padding: 22px;
      display: grid;
      gap: 14px;
    }

    label {
      font-size: 0.9rem;
      font-weight: 500;
    }

    input[type="text"] {
      width: 100%;
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 12px;
      padding: 11px 14px;
      font-size: 1rem;
      font-family: inherit;
    }

    input[type="text"]:focus {
      outline: 2px solid var(--accent);
      border-color: transparent;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 13px 18px;
      font-size: 0.98rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(44, 138, 93, 0.3);
    }

    .btn-outline {
      background: white;
      color: var(--accent-2);
      border: 1px solid rgba(47, 72, 88, 0.25);
    }

    .plan-card {
      border: 1px solid rgba(47, 72, 88, 0.12);
      border-radius: 16px;
      background: #fbfdfb;
      padding: 16px;
    }

    .plan-title {
      margin: 0;
      font-weight: 600;
      font-size: 1.1rem;
      color: var(--accent-2);
    }

    .plan-card ul {
      margin: 10px 0 0;
      padding-left: 20px;
      display: grid;
      gap: 6px;
    }

    .log-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 12px;
    }

    .log-btn {
      background: white;
      color: var(--accent-2);
      border: 1px solid rgba(47, 72, 88, 0.25);
    }

    .log-btn.active {
      background: var(--accent);
      color: white;
      border-color: transparent;
      box-shadow: 0 10px 24px rgba(44, 138, 93, 0.3);
    }

    .bar {
      height: 10px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.12);
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
      width: 0%;
      border-radius: inherit;
      background: var(--accent);
      transition: width 300ms ease;
    }

    .hint {
      margin: 0;
      color: #6b756e;
      font-size: 0.88rem;
    }

    .encourage {
      margin: 0;
      color: #2d7a4b;
      font-size: 0.92rem;
    }

    .row {
      display: flex;
      gap: 12px;
    }

    .row .btn-primary {
      margin-left: auto;
    }

    .status {
      font-size: 0.92rem;
      color: #c63b2b;
      min-height: 1.2em;
    }

    .toast {
      --rise-x: -50%;
      position: fixed;
      bottom: 22px;
      left: 50%;
      transform: translateX(-50%);
      background: rgba(20, 28, 24, 0.85);
      color: white;
      border-radius: 14px;
      padding: 11px 18px;
      font-size: 0.95rem;
      box-shadow: 0 14px 30px rgba(20, 28, 24, 0.35);
      animation: rise 250ms ease;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translate(var(--rise-x, 0), 14px);
      }
      to {
        opacity: 1;
        transform: translate(var(--rise-x, 0), 0);
      }
    }

    @media (max-width: 560px) {
      .app {
        padding: 26px 20px;
      }
      .row {
        flex-direction: column;
      }
      .row .btn-primary {
        margin-left: 0;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Coach</h1>
      <p class="subtitle">Sleep, training and meals, one day at a time.</p>
    </header>

    <section class="controls">
      <label class="demo-toggle">
        <input type="checkbox" id="demo-switch" />
        Demo Mode
      </label>
      <button class="btn-outline" id="reset-btn" type="button">Reset Data</button>
      <span class="chip" id="date">{{DATE}}</span>
    </section>

    <section class="screen" data-screen="onboarding" hidden>
      <h2>Onboarding</h2>
      <p class="subtitle">Tell us your basics (saved on this device):</p>
      <div>
        <label for="sleep-input">Hours of sleep last night</label>
        <input type="text" id="sleep-input" inputmode="numeric" placeholder="e.g., 7" />
      </div>
      <div>
        <label for="workout-input">Today's workout goal</label>
        <input type="text" id="workout-input" placeholder="e.g., Upper body strength" />
      </div>
      <div>
        <label for="nutrition-input">Nutrition goal</label>
        <input type="text" id="nutrition-input" placeholder="e.g., 160g protein, 2L water" />
      </div>
      <button class="btn-primary" id="continue-btn" type="button">Continue</button>
    </section>

    <section class="screen" data-screen="plan" hidden>
      <h2>Your Daily Plan</h2>
      <p class="subtitle" id="plan-context"></p>
      <div class="plan-card">
        <p class="plan-title" id="plan-title"></p>
        <ul id="plan-bullets"></ul>
      </div>
      <button class="btn-primary" id="start-logging-btn" type="button">Start Logging</button>
    </section>

    <section class="screen" data-screen="logging" hidden>
      <h2>Log Today</h2>
      <div class="log-grid">
        <button class="log-btn" data-kind="sleep" type="button">Log sleep</button>
        <button class="log-btn" data-kind="workout" type="button">Log workout</button>
        <button class="log-btn" data-kind="meal" type="button">Log meal</button>
      </div>
      <div class="bar"><div class="bar-fill" id="day-bar"></div></div>
      <p class="hint" id="day-percent"></p>
      <button class="btn-primary" id="complete-btn" type="button">Complete Day</button>
    </section>

    <section class="screen" data-screen="progress" hidden>
      <h2>Your Progress</h2>
      <p id="streak-line"></p>
      <div class="bar"><div class="bar-fill" id="streak-bar"></div></div>
      <p class="hint">Goal: 5-day streak</p>
      <p class="encourage">Keep going - almost there!</p>
      <div class="row">
        <button class="btn-outline" id="back-btn" type="button">Back to Today</button>
        <button class="btn-primary" id="restart-btn" type="button">Restart</button>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <div class="toast" id="toast" hidden></div>

  <script type="application/json" id="bootstrap">{{BOOTSTRAP}}</script>
  <script>
    const dateEl = document.getElementById('date');
    const statusEl = document.getElementById('status');
    const toastEl = document.getElementById('toast');
    const demoSwitch = document.getElementById('demo-switch');
    const sleepInput = document.getElementById('sleep-input');
    const workoutInput = document.getElementById('workout-input');
    const nutritionInput = document.getElementById('nutrition-input');
    const planContext = document.getElementById('plan-context');
    const planTitle = document.getElementById('plan-title');
    const planBullets = document.getElementById('plan-bullets');
    const dayBar = document.getElementById('day-bar');
    const dayPercent = document.getElementById('day-percent');
    const streakLine = document.getElementById('streak-line');
    const streakBar = document.getElementById('streak-bar');
    const screens = Array.from(document.querySelectorAll('[data-screen]'));
    const logButtons = Array.from(document.querySelectorAll('.log-btn'));

    let view = null;
    let lastToastId = 0;

    const setStatus = (message) => {
      statusEl.textContent = message || '';
    };

    const labelFor = { sleep: 'Sleep', workout: 'Workout', meal: 'Meal' };

    const renderToast = () => {
      const notification = view.notification;
      if (!notification) {
        toastEl.hidden = true;
        lastToastId = 0;
        return;
      }
      if (notification.id === lastToastId) {
        return;
      }
      lastToastId = notification.id;
      toastEl.textContent = notification.message;
      toastEl.hidden = false;
      setTimeout(() => {
        if (lastToastId === notification.id) {
          toastEl.hidden = true;
        }
      }, 1800);
    };

    const render = () => {
      if (!view) {
        return;
      }

      dateEl.textContent = view.date;
      demoSwitch.checked = view.demo_mode;
      screens.forEach((section) => {
        section.hidden = section.dataset.screen !== view.screen;
      });

      if (view.screen === 'onboarding') {
        sleepInput.value = view.sleep_hours;
        workoutInput.value = view.workout_goal;
        nutritionInput.value = view.nutrition_goal;
      }

      let context = 'Based on your sleep (' + (view.sleep_hours || '?') + 'h)';
      if (view.workout_goal) {
        context += ', workout goal: ' + view.workout_goal;
      }
      if (view.nutrition_goal) {
        context += ', nutrition: ' + view.nutrition_goal;
      }
      planContext.textContent = context;
      planTitle.textContent = view.plan.title;
      planBullets.replaceChildren(
        ...view.plan.bullets.map((bullet) => {
          const item = document.createElement('li');
          item.textContent = bullet;
          return item;
        })
      );

      logButtons.forEach((button) => {
        const kind = button.dataset.kind;
        const logged =
          kind === 'sleep' ? view.logged_sleep : kind === 'workout' ? view.logged_workout : view.logged_meal;
        button.textContent = logged ? labelFor[kind] + ' logged' : 'Log ' + kind;
        button.classList.toggle('active', logged);
      });

      dayBar.style.width = view.day_progress + '%';
      dayPercent.textContent = "Today's completion: " + Math.round(view.day_progress) + '%';

      streakLine.textContent =
        'Streak: ' + view.streak + ' day' + (view.streak === 1 ? '' : 's') + ' in a row';
      streakBar.style.width = view.streak_progress + '%';

      renderToast();
    };

    const call = async (path, body) => {
      const options = { method: 'POST' };
      if (body !== undefined) {
        options.headers = { 'content-type': 'application/json' };
        options.body = JSON.stringify(body);
      }
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      view = await res.json();
      setStatus('');
      render();
    };

    const refresh = async () => {
      const res = await fetch('/api/session');
      if (!res.ok) {
        throw new Error('Unable to load session');
      }
      view = await res.json();
      render();
    };

    const intent = (action) => {
      action().catch((err) => setStatus(err.message));
    };

    document.getElementById('continue-btn').addEventListener('click', () =>
      intent(() =>
        call('/api/continue', {
          sleep_hours: sleepInput.value,
          workout_goal: workoutInput.value,
          nutrition_goal: nutritionInput.value
        })
      )
    );

    document.getElementById('start-logging-btn').addEventListener('click', () =>
      intent(() => call('/api/navigate', { screen: 'logging' }))
    );

    logButtons.forEach((button) => {
      button.addEventListener('click', () =>
        intent(() => call('/api/log', { kind: button.dataset.kind }))
      );
    });

    document.getElementById('complete-btn').addEventListener('click', () =>
      intent(() => call('/api/complete'))
    );

    document.getElementById('back-btn').addEventListener('click', () =>
      intent(() => call('/api/navigate', { screen: 'logging' }))
    );

    document.getElementById('restart-btn').addEventListener('click', () =>
      intent(() => call('/api/navigate', { screen: 'onboarding' }))
    );

    document.getElementById('reset-btn').addEventListener('click', () =>
      intent(() => call('/api/reset'))
    );

    demoSwitch.addEventListener('change', () =>
      intent(() => call('/api/demo', { on: demoSwitch.checked }))
    );

    try {
      view = JSON.parse(document.getElementById('bootstrap').textContent);
    } catch (err) {
      view = null;
    }

    if (view) {
      render();
    } else {
      refresh().catch((err) => setStatus(err.message));
    }
  </script>
</body>
</html>
"#;
