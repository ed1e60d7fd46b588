pub fn render_index(today: &str) -> String {
    INDEX_HTML.replace("{{TODAY}}", today)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Attendance Tracker</title>
  <style>
    :root {
      --bg: #f4f6fb;
      --ink: #1f2430;
      --muted: #6b7385;
      --primary: #4f46e5;
      --present: #10b981;
      --absent: #f43f5e;
      --warning: #f59e0b;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(31, 36, 48, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #eef0ff 70%);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 24px 16px 40px;
    }

    main {
      max-width: 440px;
      margin: 0 auto;
      display: grid;
      gap: 16px;
    }

    header {
      text-align: center;
    }

    header h1 {
      margin: 8px 0 4px;
      font-size: 1.5rem;
    }

    header p,
    .muted {
      margin: 0;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 16px;
    }

    .card h2 {
      margin: 0 0 12px;
      font-size: 1rem;
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    button {
      font: inherit;
      cursor: pointer;
      border: none;
    }

    .ghost {
      background: transparent;
      color: var(--ink);
      border-radius: 8px;
      padding: 4px 10px;
    }

    .ghost:hover {
      background: #eef0f5;
    }

    #add-form {
      display: none;
      gap: 8px;
      margin-bottom: 12px;
    }

    #add-form.open {
      display: flex;
    }

    #add-form input {
      flex: 1;
      padding: 8px 10px;
      border-radius: 8px;
      border: 1px solid #d7dbe6;
    }

    #add-form button {
      background: var(--primary);
      color: #fff;
      border-radius: 8px;
      padding: 8px 14px;
    }

    .chips {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .chip {
      display: flex;
      align-items: center;
      gap: 6px;
      border-radius: 999px;
      padding: 6px 12px;
      background: #eef0f5;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .chip.selected {
      background: var(--primary);
      color: #fff;
    }

    .chip .pct {
      font-size: 0.75rem;
      opacity: 0.8;
    }

    .chip .remove {
      background: transparent;
      color: inherit;
      padding: 0 2px;
      opacity: 0.6;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 10px;
      text-align: center;
    }

    .stats .value {
      display: block;
      font-size: 1.25rem;
      font-weight: 700;
    }

    .stats .present { color: var(--present); }
    .stats .absent { color: var(--absent); }
    .stats .pct { color: var(--primary); }

    .bar {
      height: 10px;
      border-radius: 999px;
      background: #eef0f5;
      overflow: hidden;
    }

    .bar span {
      display: block;
      height: 100%;
      transition: width 400ms ease;
    }

    .bar span[data-standing="good"] { background: var(--present); }
    .bar span[data-standing="warning"] { background: var(--warning); }
    .bar span[data-standing="alert"] { background: var(--absent); }

    #advice {
      margin-top: 8px;
      text-align: center;
      font-size: 0.8rem;
      color: var(--muted);
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
    }

    .weekday {
      text-align: center;
      font-size: 0.75rem;
      color: var(--muted);
      padding: 4px 0;
    }

    .day {
      position: relative;
      aspect-ratio: 1;
      border-radius: 8px;
      background: #f3f4f8;
      display: flex;
      align-items: center;
      justify-content: center;
      font-size: 0.85rem;
    }

    .day.sunday { color: var(--absent); }
    .day.today { outline: 2px solid var(--primary); outline-offset: 1px; }
    .day.present { background: var(--present); color: #fff; }
    .day.absent { background: var(--absent); color: #fff; }

    .day .actions {
      position: absolute;
      inset: 0;
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 2px;
      background: rgba(255, 255, 255, 0.95);
      border-radius: 8px;
      opacity: 0;
      transition: opacity 150ms ease;
    }

    .day:hover .actions,
    .day:active .actions {
      opacity: 1;
    }

    .actions button {
      width: 24px;
      height: 24px;
      border-radius: 999px;
      font-size: 0.75rem;
    }

    .actions .mark-present { background: #d1fae5; color: #047857; }
    .actions .mark-absent { background: #ffe4e6; color: #be123c; }

    .status {
      min-height: 20px;
      text-align: center;
      font-size: 0.85rem;
    }

    .status[data-type="error"] { color: var(--absent); }
    .status[data-type="ok"] { color: var(--present); }

    .hidden {
      display: none;
    }
  </style>
</head>
<body>
  <main>
    <header>
      <h1>Attendance Tracker</h1>
      <p>Track attendance by subject</p>
    </header>

    <section class="card">
      <h2>
        <span>Subjects</span>
        <button class="ghost" id="toggle-add" type="button" aria-label="Add subject">+</button>
      </h2>
      <form id="add-form">
        <input id="subject-name" placeholder="Enter subject name..." maxlength="30" autocomplete="off" />
        <button type="submit">Add</button>
      </form>
      <div class="chips" id="chips"></div>
      <p class="muted" id="empty">Add your first subject to start tracking</p>
    </section>

    <div id="subject-view" class="hidden">
      <section class="stats">
        <div class="card"><span class="value present" id="present">0</span><span class="muted">Present</span></div>
        <div class="card"><span class="value absent" id="absent">0</span><span class="muted">Absent</span></div>
        <div class="card"><span class="value pct" id="percentage">0.0%</span><span class="muted">Attendance</span></div>
      </section>

      <section class="card" style="margin-top: 16px">
        <h2 id="progress-title">Progress</h2>
        <div class="bar"><span id="bar"></span></div>
        <p id="advice"></p>
      </section>

      <section class="card" style="margin-top: 16px">
        <h2>
          <button class="ghost" id="prev" type="button" aria-label="Previous month">&lsaquo;</button>
          <span id="month-label"></span>
          <button class="ghost" id="next" type="button" aria-label="Next month">&rsaquo;</button>
        </h2>
        <div class="grid" id="weekdays"></div>
        <div class="grid" id="calendar"></div>
      </section>
    </div>

    <div class="status" id="status"></div>
  </main>

  <script>
    const today = '{{TODAY}}';
    const chipsEl = document.getElementById('chips');
    const emptyEl = document.getElementById('empty');
    const viewEl = document.getElementById('subject-view');
    const statusEl = document.getElementById('status');
    const calendarEl = document.getElementById('calendar');
    const addForm = document.getElementById('add-form');
    const nameInput = document.getElementById('subject-name');

    let month = today.slice(0, 7);
    let currentView = null;

    ['Su', 'Mo', 'Tu', 'We', 'Th', 'Fr', 'Sa'].forEach((label) => {
      const cell = document.createElement('div');
      cell.className = 'weekday';
      cell.textContent = label;
      document.getElementById('weekdays').appendChild(cell);
    });

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) {
        setTimeout(() => {
          if (statusEl.textContent === message) {
            setStatus('', '');
          }
        }, 1800);
      }
    };

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderState = (state) => {
      chipsEl.innerHTML = '';
      state.subjects.forEach((subject) => {
        const chip = document.createElement('button');
        chip.type = 'button';
        chip.className = 'chip';
        if (state.selected && state.selected.name === subject.name) {
          chip.classList.add('selected');
        }
        const name = document.createElement('span');
        name.textContent = subject.name;
        const pct = document.createElement('span');
        pct.className = 'pct';
        pct.textContent = `${subject.percentage}%`;
        const remove = document.createElement('span');
        remove.className = 'remove';
        remove.textContent = '×';
        remove.addEventListener('click', (event) => {
          event.stopPropagation();
          removeSubject(subject.name).catch((err) => setStatus(err.message, 'error'));
        });
        chip.append(name, pct, remove);
        chip.addEventListener('click', () => {
          selectSubject(subject.name).catch((err) => setStatus(err.message, 'error'));
        });
        chipsEl.appendChild(chip);
      });

      emptyEl.classList.toggle('hidden', state.subjects.length > 0);
      viewEl.classList.toggle('hidden', !state.selected);
      if (!state.selected) {
        return;
      }

      const selected = state.selected;
      document.getElementById('present').textContent = selected.present_count;
      document.getElementById('absent').textContent = selected.absent_count;
      document.getElementById('percentage').textContent = `${selected.percentage}%`;
      document.getElementById('progress-title').textContent = `${selected.name} Progress`;
      const bar = document.getElementById('bar');
      bar.style.width = `${selected.percentage}%`;
      bar.dataset.standing = selected.standing;
      document.getElementById('advice').textContent = selected.message;
    };

    const renderMonth = (view) => {
      document.getElementById('month-label').textContent = view.label;
      calendarEl.innerHTML = '';
      for (let i = 0; i < view.leading_blanks; i += 1) {
        calendarEl.appendChild(document.createElement('div'));
      }
      view.days.forEach((day) => {
        const cell = document.createElement('div');
        cell.className = 'day';
        if (day.status) cell.classList.add(day.status);
        if (day.is_today) cell.classList.add('today');
        if (day.is_sunday) cell.classList.add('sunday');
        cell.innerHTML = `<span>${day.day}</span>
          <div class="actions">
            <button type="button" class="mark-present" title="Present">&#10003;</button>
            <button type="button" class="mark-absent" title="Absent">&#10005;</button>
          </div>`;
        cell.querySelector('.mark-present').addEventListener('click', () => {
          mark(day.date, 'present').catch((err) => setStatus(err.message, 'error'));
        });
        cell.querySelector('.mark-absent').addEventListener('click', () => {
          mark(day.date, 'absent').catch((err) => setStatus(err.message, 'error'));
        });
        calendarEl.appendChild(cell);
      });
      month = view.month;
      currentView = view;
    };

    const loadState = async () => renderState(await request('GET', '/api/state'));
    const loadMonth = async (key) => renderMonth(await request('GET', `/api/month?month=${key}`));
    const refresh = async () => {
      await loadState();
      await loadMonth(month);
    };

    const selectSubject = async (name) => {
      renderState(await request('POST', '/api/subjects/select', { name }));
      await loadMonth(month);
    };

    const removeSubject = async (name) => {
      const res = await request('DELETE', `/api/subjects?name=${encodeURIComponent(name)}`);
      renderState(res.state);
      await loadMonth(month);
      setStatus(`Deleted ${name}`, 'ok');
    };

    const mark = async (date, status) => {
      await request('POST', '/api/attendance', { date, status });
      await refresh();
    };

    document.getElementById('toggle-add').addEventListener('click', () => {
      addForm.classList.toggle('open');
      nameInput.focus();
    });

    addForm.addEventListener('submit', (event) => {
      event.preventDefault();
      request('POST', '/api/subjects', { name: nameInput.value })
        .then(async (state) => {
          const added = state.selected ? state.selected.name : nameInput.value.trim();
          nameInput.value = '';
          addForm.classList.remove('open');
          renderState(state);
          await loadMonth(month);
          setStatus(`Added ${added}`, 'ok');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    const step = (key) => {
      if (currentView) {
        loadMonth(currentView[key]).catch((err) => setStatus(err.message, 'error'));
      }
    };

    document.getElementById('prev').addEventListener('click', () => step('prev'));
    document.getElementById('next').addEventListener('click', () => step('next'));

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_embeds_today() {
        let html = render_index("2024-03-01");
        assert!(html.contains("const today = '2024-03-01';"));
        assert!(!html.contains("{{TODAY}}"));
    }
}
