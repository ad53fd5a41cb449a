use leptos::prelude::*;

/// Theme, glass surfaces, buttons and keyframes shared by every section
#[component]
pub fn PortfolioStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            :root {
                --background: 230 35% 7%;
                --foreground: 210 40% 96%;
                --muted-foreground: 215 20% 65%;
                --primary: 199 89% 60%;
                --secondary: 230 25% 18%;
                --neon-blue: 199 89% 60%;
                --neon-purple: 270 91% 65%;
                --neon-cyan: 185 96% 55%;
                --neon-pink: 320 90% 65%;
            }

            html { scroll-behavior: smooth; }
            body {
                background-color: hsl(var(--background));
                color: hsl(var(--foreground));
                font-family: 'Inter', system-ui, sans-serif;
            }

            /* Preloader */
            .preloader {
                position: fixed;
                inset: 0;
                z-index: 100;
                display: flex;
                align-items: center;
                justify-content: center;
                background: radial-gradient(circle at center, hsl(230 35% 12%), hsl(var(--background)));
            }
            .progress-container {
                width: 16rem;
                height: 4px;
                border-radius: 9999px;
                overflow: hidden;
                background-color: hsl(var(--secondary));
            }
            .progress-bar {
                height: 100%;
                border-radius: 9999px;
                background: linear-gradient(90deg, hsl(var(--neon-blue)), hsl(var(--neon-purple)));
                box-shadow: 0 0 12px hsl(var(--neon-blue) / 0.6);
            }

            /* Surfaces */
            .text-gradient {
                background: linear-gradient(135deg, hsl(var(--neon-blue)), hsl(var(--neon-purple)) 60%, hsl(var(--neon-pink)));
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }
            .glass {
                background-color: hsl(230 30% 14% / 0.45);
                border: 1px solid hsl(0 0% 100% / 0.08);
                backdrop-filter: blur(16px);
                -webkit-backdrop-filter: blur(16px);
            }
            .glow-primary { box-shadow: 0 0 30px hsl(var(--neon-blue) / 0.4); }
            .glow-secondary { box-shadow: 0 0 24px hsl(var(--neon-purple) / 0.35); }
            .hover\:glow-primary:hover { box-shadow: 0 0 30px hsl(var(--neon-blue) / 0.4); }
            .hover\:glow-secondary:hover { box-shadow: 0 0 24px hsl(var(--neon-purple) / 0.35); }

            .card-hover { transition: transform 0.3s, box-shadow 0.3s; }
            .card-hover:hover {
                transform: translateY(-6px);
                box-shadow: 0 20px 40px -12px hsl(var(--neon-blue) / 0.3);
            }

            /* Buttons */
            .btn-hero {
                padding: 0.75rem 1.75rem;
                font-weight: 600;
                color: white;
                border-radius: 9999px;
                background: linear-gradient(135deg, hsl(var(--neon-blue)), hsl(var(--neon-purple)));
                box-shadow: 0 0 20px hsl(var(--neon-blue) / 0.35);
                transition: box-shadow 0.3s, filter 0.3s;
                cursor: pointer;
            }
            .btn-hero:hover { box-shadow: 0 0 32px hsl(var(--neon-purple) / 0.55); filter: brightness(1.1); }
            .btn-hero:disabled { opacity: 0.5; cursor: not-allowed; }

            .btn-ghost {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.5rem 1rem;
                border-radius: 0.75rem;
                border: 1px solid hsl(0 0% 100% / 0.12);
                transition: background-color 0.3s, border-color 0.3s;
            }
            .btn-ghost:hover { background-color: hsl(0 0% 100% / 0.06); border-color: hsl(var(--neon-blue) / 0.6); }

            /* Form */
            .input-glow {
                padding: 0.75rem 1rem;
                border-radius: 0.75rem;
                color: hsl(var(--foreground));
                background-color: hsl(230 30% 12% / 0.6);
                border: 1px solid hsl(0 0% 100% / 0.1);
                outline: none;
                transition: border-color 0.3s, box-shadow 0.3s;
            }
            .input-glow:focus {
                border-color: hsl(var(--neon-blue));
                box-shadow: 0 0 0 3px hsl(var(--neon-blue) / 0.2);
            }
            .input-glow.input-invalid { border-color: rgb(248 113 113); }

            /* Spinner */
            .spinner-container { display: inline-flex; align-items: center; }
            .spinner {
                display: inline-block;
                border-radius: 9999px;
                border: 2px solid transparent;
                border-bottom-color: currentColor;
                animation: spin 0.8s linear infinite;
            }
            .spinner-sm { width: 1.25rem; height: 1.25rem; }
            .spinner-md { width: 2rem; height: 2rem; }
            @keyframes spin { to { transform: rotate(360deg); } }

            /* Ambient motion */
            @keyframes pulse-glow {
                0%, 100% { filter: drop-shadow(0 0 6px hsl(var(--neon-blue) / 0.4)); }
                50% { filter: drop-shadow(0 0 18px hsl(var(--neon-purple) / 0.7)); }
            }
            .animate-pulse-glow { animation: pulse-glow 2.5s ease-in-out infinite; }

            @keyframes float {
                0%, 100% { transform: translateY(0); opacity: 0.3; }
                50% { transform: translateY(-20px); opacity: 1; }
            }
            .animate-float { animation: float 6s ease-in-out infinite; }

            @keyframes orb-float {
                from { transform: translateY(0); }
                to { transform: translateY(-20px); }
            }
            .glow-orb { animation: orb-float 3s cubic-bezier(0.45, 0, 0.55, 1) infinite alternate both; }

            @keyframes footer-float {
                from { transform: translateY(0); }
                to { transform: translateY(-30px); }
            }
            .footer-particle { animation: footer-float 4s cubic-bezier(0.45, 0, 0.55, 1) infinite alternate both; }

            @keyframes button-pulse {
                0%, 100% { transform: scale(1); }
                50% { transform: scale(1.1); }
            }

            @media (prefers-reduced-motion: reduce) {
                .glow-orb, .footer-particle, .animate-float, .animate-pulse-glow { animation: none; }
            }
            "#
        </style>
    }
}
