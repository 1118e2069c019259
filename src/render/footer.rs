pub const FOOTER: &str = "<footer class=\"bg-slate-900 text-slate-300 border-t border-slate-800 mt-auto\">\n\
<div class=\"max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16 text-center\">\n\
<div class=\"flex justify-center mb-6 items-center select-none\">\
<span class=\"font-bold text-3xl tracking-tighter text-amber-600\">Trend</span>\
<span class=\"font-bold text-3xl tracking-tighter text-slate-100\">Brief</span></div>\n\
<h3 class=\"text-sm text-slate-400 font-medium tracking-widest mb-8\">聽見市場聲音，看見財富趨勢</h3>\n\
<div class=\"flex justify-center gap-6 mb-10\">\
<a href=\"mailto:contact@trendbrief.com\" title=\"Email\" class=\"w-10 h-10 rounded-full bg-slate-800 flex items-center justify-center hover:bg-amber-600 hover:text-white\">✉</a></div>\n\
<div class=\"border-t border-slate-800 pt-8\">\
<p class=\"text-[11px] text-slate-600 leading-relaxed max-w-lg mx-auto mb-2\">免責聲明：本網站內容整理自各大財經 Podcast，僅供資訊參考與學習使用，不代表任何投資建議。</p>\
<p class=\"text-xs text-slate-600\">&copy; 2025 TrendBrief 版權所有</p></div>\n\
</div>\n</footer>\n";
