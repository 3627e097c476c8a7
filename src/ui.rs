pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Driver Customer Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #cfe0f0;
      --ink: #26303a;
      --accent: #2f80ed;
      --accent-2: #27ae60;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(38, 48, 58, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3ecf5 60%, #f2f6fa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    h1, h2, h3 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      margin: 0;
    }

    .view {
      display: none;
    }

    .view.active {
      display: block;
    }

    .centered {
      min-height: 70vh;
      display: grid;
      place-items: center;
    }

    .spinner {
      width: 48px;
      height: 48px;
      border: 4px solid rgba(47, 128, 237, 0.2);
      border-top-color: var(--accent);
      border-radius: 50%;
      animation: spin 800ms linear infinite;
    }

    @keyframes spin {
      to { transform: rotate(360deg); }
    }

    .login-card {
      width: min(380px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 18px;
      text-align: center;
    }

    .login-card p {
      margin: 0;
      color: #5d6771;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.6;
      cursor: wait;
    }

    .btn-google {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 128, 237, 0.3);
    }

    .btn-apple {
      background: var(--ink);
      color: white;
      box-shadow: 0 10px 24px rgba(38, 48, 58, 0.3);
    }

    .shell {
      width: min(980px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    .topbar {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 18px 24px;
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
      flex-wrap: wrap;
    }

    .profile {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .profile img {
      width: 44px;
      height: 44px;
      border-radius: 50%;
      object-fit: cover;
    }

    .profile .who span {
      display: block;
    }

    .profile .who .name {
      font-weight: 600;
    }

    .profile .who .email {
      font-size: 0.85rem;
      color: #6b747d;
    }

    .btn-logout {
      background: transparent;
      color: #6b747d;
      border: 1px solid rgba(38, 48, 58, 0.18);
      box-shadow: none;
      padding: 10px 18px;
    }

    .add-panel {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 14px;
    }

    .add-panel form {
      display: grid;
      grid-template-columns: 1fr 1fr auto;
      gap: 12px;
    }

    input[type="text"] {
      border: 1px solid rgba(38, 48, 58, 0.16);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
      background: white;
    }

    input[type="text"]:focus {
      outline: 2px solid var(--accent);
      border-color: transparent;
    }

    .btn-add {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(39, 174, 96, 0.3);
      white-space: nowrap;
    }

    .list-header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    .list-header .count {
      color: #6b747d;
      font-size: 0.95rem;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
      gap: 16px;
    }

    .customer-card {
      background: var(--card);
      border-radius: 18px;
      border: 1px solid rgba(38, 48, 58, 0.08);
      box-shadow: var(--shadow);
      padding: 18px;
      display: grid;
      gap: 12px;
      cursor: pointer;
    }

    .card-top {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 10px;
    }

    .card-top h3 {
      font-size: 1.15rem;
    }

    .location {
      color: #6b747d;
      font-size: 0.9rem;
      margin-top: 4px;
    }

    .btn-visit {
      background: var(--accent);
      color: white;
      width: 38px;
      height: 38px;
      padding: 0;
      border-radius: 12px;
      font-size: 1.3rem;
      line-height: 1;
      box-shadow: 0 8px 18px rgba(47, 128, 237, 0.3);
      flex-shrink: 0;
    }

    .card-stats {
      display: flex;
      gap: 18px;
      font-size: 0.9rem;
      color: #49535d;
    }

    .card-stats b {
      color: var(--ink);
    }

    .today-pill {
      background: rgba(39, 174, 96, 0.12);
      color: #1e8a4c;
      border-radius: 10px;
      padding: 8px 12px;
      font-size: 0.85rem;
      font-weight: 600;
    }

    .empty-state {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 48px 24px;
      text-align: center;
      color: #6b747d;
    }

    .status {
      font-size: 0.95rem;
      color: #6b747d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .modal-backdrop {
      position: fixed;
      inset: 0;
      background: rgba(38, 48, 58, 0.45);
      display: none;
      place-items: center;
      padding: 18px;
    }

    .modal-backdrop.active {
      display: grid;
    }

    .modal {
      width: min(460px, 100%);
      max-height: 80vh;
      overflow-y: auto;
      background: white;
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 16px;
    }

    .modal-head {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 10px;
    }

    .btn-close {
      background: transparent;
      color: #6b747d;
      box-shadow: none;
      font-size: 1.4rem;
      padding: 0 6px;
    }

    .modal-stats {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 12px;
    }

    .modal-stats .stat {
      background: #f3f6f9;
      border-radius: 12px;
      padding: 12px;
      text-align: center;
    }

    .modal-stats .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent);
    }

    .modal-stats .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b949d;
    }

    .visit-item {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(38, 48, 58, 0.08);
    }

    .visit-item.today {
      border-color: rgba(39, 174, 96, 0.5);
      background: rgba(39, 174, 96, 0.07);
    }

    .visit-item .today-label {
      font-size: 0.8rem;
      color: #1e8a4c;
      font-weight: 600;
    }

    .no-visits {
      text-align: center;
      color: #8b949d;
      padding: 18px 0;
    }

    @media (max-width: 640px) {
      .add-panel form {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <div id="loading-view" class="view active centered">
    <div class="spinner" aria-label="Loading"></div>
  </div>

  <div id="login-view" class="view centered">
    <div class="login-card">
      <h1>Driver Tracker</h1>
      <p>Track your recurring customer visits.</p>
      <button class="btn-google" id="google-login-btn" type="button">Continue with Google</button>
      <button class="btn-apple" id="apple-login-btn" type="button">Continue with Apple</button>
      <div class="status" id="login-status"></div>
    </div>
  </div>

  <div id="main-view" class="view">
    <div class="shell">
      <div class="topbar">
        <div class="profile">
          <img id="user-avatar" src="" alt="" />
          <div class="who">
            <span class="name" id="user-name"></span>
            <span class="email" id="user-email"></span>
          </div>
        </div>
        <button class="btn-logout" id="logout-btn" type="button">Sign out</button>
      </div>

      <section class="add-panel">
        <h2>Add a customer</h2>
        <form id="customer-form">
          <input type="text" id="customer-name" placeholder="Customer name" autocomplete="off" />
          <input type="text" id="customer-location" placeholder="Location" autocomplete="off" />
          <button class="btn-add" id="add-customer-btn" type="submit">Add Customer</button>
        </form>
        <div class="status" id="status"></div>
      </section>

      <section>
        <div class="list-header">
          <h2>Customers</h2>
          <span class="count" id="customer-count">0 Customers</span>
        </div>
      </section>

      <div class="empty-state" id="empty-state" style="display: none;">
        <p>No customers yet. Add your first stop above.</p>
      </div>
      <div class="grid" id="customer-grid"></div>
    </div>
  </div>

  <div class="modal-backdrop" id="customer-modal">
    <div class="modal">
      <div class="modal-head">
        <div>
          <h3 id="modal-customer-name"></h3>
          <div class="location" id="modal-customer-location"></div>
        </div>
        <button class="btn-close" id="close-modal" type="button" aria-label="Close">&times;</button>
      </div>
      <div class="modal-stats">
        <div class="stat">
          <span class="value" id="modal-total-visits">0</span>
          <span class="label">Total visits</span>
        </div>
        <div class="stat">
          <span class="value" id="modal-days-visited">0</span>
          <span class="label">Days visited</span>
        </div>
      </div>
      <div id="visit-list"></div>
    </div>
  </div>

  <script>
    const views = {
      loading: document.getElementById('loading-view'),
      login: document.getElementById('login-view'),
      main: document.getElementById('main-view')
    };
    const statusEl = document.getElementById('status');
    const loginStatusEl = document.getElementById('login-status');
    const gridEl = document.getElementById('customer-grid');
    const emptyEl = document.getElementById('empty-state');
    const countEl = document.getElementById('customer-count');
    const modalEl = document.getElementById('customer-modal');

    const showView = (name) => {
      Object.entries(views).forEach(([key, el]) => {
        el.classList.toggle('active', key === name);
      });
    };

    const setStatus = (el, message, type) => {
      el.textContent = message;
      el.dataset.type = type || '';
    };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[ch]);

    const plural = (count, word) => `${count} ${word}${count === 1 ? '' : 's'}`;

    const formatDate = (iso) =>
      new Date(`${iso}T00:00:00`).toLocaleDateString('en-US', {
        weekday: 'short',
        year: 'numeric',
        month: 'short',
        day: 'numeric'
      });

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      if (res.status === 204) {
        return null;
      }
      return res.json();
    };

    const setProfile = (user) => {
      document.getElementById('user-avatar').src = user.avatar;
      document.getElementById('user-name').textContent = user.name;
      document.getElementById('user-email').textContent = user.email;
    };

    const renderCard = (card) => {
      const todayHtml = card.stats.today_visit
        ? `<div class="today-pill">Visited today: ${plural(card.stats.today_visit.count, 'time')}</div>`
        : '';
      return `
        <div class="customer-card" data-customer-id="${escapeHtml(card.id)}">
          <div class="card-top">
            <div>
              <h3>${escapeHtml(card.name)}</h3>
              <div class="location">${escapeHtml(card.location)}</div>
            </div>
            <button class="btn-visit" data-add-visit="${escapeHtml(card.id)}" title="Add visit for today" type="button">+</button>
          </div>
          <div class="card-stats">
            <span>Total Visits: <b>${card.stats.total_visits}</b></span>
            <span>Days: <b>${card.stats.total_days}</b></span>
          </div>
          ${todayHtml}
        </div>
      `;
    };

    const renderCustomers = (data) => {
      countEl.textContent = plural(data.count, 'Customer');
      if (data.count === 0) {
        emptyEl.style.display = 'block';
        gridEl.style.display = 'none';
        return;
      }
      emptyEl.style.display = 'none';
      gridEl.style.display = 'grid';
      gridEl.innerHTML = data.customers.map(renderCard).join('');
    };

    const refreshCustomers = async () => {
      renderCustomers(await api('/api/customers'));
    };

    const openModal = async (customerId) => {
      const detail = await api(`/api/customers/${encodeURIComponent(customerId)}`);
      document.getElementById('modal-customer-name').textContent = detail.name;
      document.getElementById('modal-customer-location').textContent = detail.location;
      document.getElementById('modal-total-visits').textContent = detail.stats.total_visits;
      document.getElementById('modal-days-visited').textContent = detail.stats.total_days;

      const visitList = document.getElementById('visit-list');
      if (detail.history.length === 0) {
        visitList.innerHTML = '<div class="no-visits">No visits recorded yet</div>';
      } else {
        visitList.innerHTML = detail.history
          .map((visit) => `
            <div class="visit-item ${visit.is_today ? 'today' : ''}">
              <div>
                <div>${formatDate(visit.date)}</div>
                ${visit.is_today ? '<div class="today-label">Today</div>' : ''}
              </div>
              <div>${plural(visit.count, 'visit')}</div>
            </div>
          `)
          .join('');
      }

      modalEl.classList.add('active');
    };

    const closeModal = () => {
      modalEl.classList.remove('active');
    };

    const handleLogin = async (provider) => {
      const button = document.getElementById(`${provider}-login-btn`);
      button.disabled = true;
      try {
        const user = await api('/api/login', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ provider })
        });
        setProfile(user);
        await refreshCustomers();
        showView('main');
      } catch (err) {
        setStatus(loginStatusEl, err.message, 'error');
      } finally {
        button.disabled = false;
      }
    };

    const handleLogout = async () => {
      try {
        await api('/api/logout', { method: 'POST' });
      } finally {
        closeModal();
        showView('login');
      }
    };

    document.getElementById('google-login-btn').addEventListener('click', () => handleLogin('google'));
    document.getElementById('apple-login-btn').addEventListener('click', () => handleLogin('apple'));
    document.getElementById('logout-btn').addEventListener('click', handleLogout);
    document.getElementById('close-modal').addEventListener('click', closeModal);

    modalEl.addEventListener('click', (event) => {
      if (event.target === modalEl) {
        closeModal();
      }
    });

    document.addEventListener('keydown', (event) => {
      if (event.key === 'Escape') {
        closeModal();
      }
    });

    gridEl.addEventListener('click', (event) => {
      const visitBtn = event.target.closest('[data-add-visit]');
      if (visitBtn) {
        event.stopPropagation();
        api(`/api/customers/${encodeURIComponent(visitBtn.dataset.addVisit)}/visits`, { method: 'POST' })
          .then(refreshCustomers)
          .catch((err) => setStatus(statusEl, err.message, 'error'));
        return;
      }
      const card = event.target.closest('[data-customer-id]');
      if (card) {
        openModal(card.dataset.customerId).catch((err) => setStatus(statusEl, err.message, 'error'));
      }
    });

    document.getElementById('customer-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const nameInput = document.getElementById('customer-name');
      const locationInput = document.getElementById('customer-location');
      const submitBtn = document.getElementById('add-customer-btn');

      const name = nameInput.value.trim();
      const location = locationInput.value.trim();
      if (!name || !location) {
        setStatus(statusEl, 'Name and location are required', 'error');
        return;
      }

      submitBtn.disabled = true;
      submitBtn.textContent = 'Adding Customer...';
      try {
        await api('/api/customers', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ name, location })
        });
        nameInput.value = '';
        locationInput.value = '';
        await refreshCustomers();
        setStatus(statusEl, 'Customer added', 'ok');
        setTimeout(() => setStatus(statusEl, '', ''), 1200);
      } catch (err) {
        setStatus(statusEl, err.message, 'error');
      } finally {
        submitBtn.disabled = false;
        submitBtn.textContent = 'Add Customer';
      }
    });

    const boot = async () => {
      try {
        const session = await api('/api/session');
        if (session.user) {
          setProfile(session.user);
          await refreshCustomers();
          showView('main');
        } else {
          showView('login');
        }
      } catch (err) {
        setStatus(loginStatusEl, err.message, 'error');
        showView('login');
      }
    };

    boot();
  </script>
</body>
</html>
"#;
