//! Dashboard page styles.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #f6f7fb;
    --panel: #ffffff;
    --border: #e5e7eb;
    --text: #1f2937;
    --text-muted: #6b7280;
    --accent: #667eea;
    --success: #10b981;
    --warning: #f59e0b;
    --info: #38b2ac;
    --danger: #ef4444;
    --secondary: #9ca3af;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 20px;
    min-height: 100vh;
}

.container { max-width: 1200px; margin: 0 auto; }

header {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
    margin-bottom: 20px;
}

.refresh-time { color: var(--text-muted); font-size: 0.85rem; }

.stats-panel {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 16px;
    margin-bottom: 20px;
}

.stat-card {
    background: var(--panel);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 16px;
}

.stat-title { color: var(--text-muted); font-size: 0.85rem; }
.stat-value { font-size: 1.6rem; font-weight: 700; margin: 4px 0; }
.stat-change { font-size: 0.85rem; }

.panel {
    background: var(--panel);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 16px;
    margin-bottom: 20px;
}

.panel h2 { font-size: 1rem; margin-bottom: 12px; }

.panel-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 20px;
}

table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 10px 8px; border-bottom: 1px solid var(--border); }
th { color: var(--text-muted); font-weight: 600; font-size: 0.8rem; }

.badge {
    padding: 3px 10px;
    border-radius: 10px;
    color: #fff;
    font-size: 0.75rem;
    text-transform: capitalize;
}
.bg-success { background: var(--success); }
.bg-warning { background: var(--warning); }
.bg-info { background: var(--info); }
.bg-danger { background: var(--danger); }
.bg-secondary { background: var(--secondary); }

.text-success { color: var(--success); }
.text-danger { color: var(--danger); }
.text-warning { color: var(--warning); }
.text-muted { color: var(--text-muted); }
.text-end { text-align: right; }

.d-flex { display: flex; }
.align-items-center { align-items: center; }
.flex-grow-1 { flex-grow: 1; }
.font-bold { font-weight: 700; }
.small { font-size: 0.8rem; }

.avatar img { border-radius: 50%; object-fit: cover; }
.avatar-md img { width: 36px; height: 36px; }
.avatar-lg img { width: 44px; height: 44px; }

.product-image img { width: 50px; height: 50px; object-fit: cover; border-radius: 6px; }

.recent-message { border-bottom: 1px solid var(--border); position: relative; }
.recent-message.unread { background: #eef2ff; }
.status-indicator {
    position: absolute;
    bottom: 0;
    right: 0;
    width: 10px;
    height: 10px;
    border-radius: 50%;
    border: 2px solid var(--panel);
}
.status-indicator.online { background: var(--success); }
.status-indicator.offline { background: var(--secondary); }
.unread-indicator {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--accent);
    align-self: center;
}
";
