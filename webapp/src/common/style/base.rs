pub const BASE_STYLES: &str = r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--typography-family);
  color: var(--color-text-primary);
  background-color: var(--color-background-base);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

ul {
  list-style: none;
}

img {
  max-width: 100%;
  display: block;
}

/* Visibility by viewport */
.desktop-only {
  display: none;
}

@media (min-width: 768px) {
  .desktop-only {
    display: flex;
  }

  .mobile-only {
    display: none !important;
  }
}

/* Grids */
.split-grid {
  display: grid;
  gap: 48px;
  align-items: center;
}

@media (min-width: 1024px) {
  .split-grid {
    grid-template-columns: minmax(0, 1fr) minmax(0, 1fr);
  }
}

.card-grid {
  display: grid;
  gap: 24px;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
}

.stack {
  display: flex;
  flex-direction: column;
  gap: 24px;
}

.button-row {
  display: flex;
  flex-wrap: wrap;
  gap: 16px;
}

.overline {
  display: block;
  text-transform: uppercase;
  letter-spacing: var(--typography-letter-spacing-wide);
  font-size: var(--typography-sizes-overline);
}
"#;
